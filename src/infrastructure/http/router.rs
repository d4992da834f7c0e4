use crate::infrastructure::http::controllers::{custom_attributes, inboxes};
use crate::infrastructure::http::middleware::{load_user_context, AppState};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Inbox routes run against an explicit user context
    let inbox_routes = Router::new()
        .route(
            "/api/v1/accounts/:account_id/inboxes",
            get(inboxes::list_inboxes).post(inboxes::create_inbox),
        )
        .route(
            "/api/v1/accounts/:account_id/inboxes/:inbox_id",
            get(inboxes::get_inbox)
                .patch(inboxes::update_inbox)
                .delete(inboxes::delete_inbox),
        )
        .route(
            "/api/v1/accounts/:account_id/inboxes/:inbox_id/assignable_agents",
            get(inboxes::list_assignable_agents),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            load_user_context,
        ));

    // Custom attributes skip the context middleware entirely
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/conversations/:conversation_id/custom_attributes",
            get(custom_attributes::show_custom_attributes)
                .patch(custom_attributes::update_custom_attributes)
                .put(custom_attributes::update_custom_attributes),
        )
        .merge(inbox_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
