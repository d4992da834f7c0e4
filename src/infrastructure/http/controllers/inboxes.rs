use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    domain::entities::{
        AssignableAgentsResponse, CreateInbox, Inbox, InboxListResponse, UpdateInbox, UserContext,
    },
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// GET /api/v1/accounts/:account_id/inboxes
pub async fn list_inboxes(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
) -> ApiResult<Json<InboxListResponse>> {
    let inboxes = state.inbox_service.list(&ctx).await?;
    Ok(Json(InboxListResponse { inboxes }))
}

/// POST /api/v1/accounts/:account_id/inboxes
pub async fn create_inbox(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Json(request): Json<CreateInbox>,
) -> ApiResult<(StatusCode, Json<Inbox>)> {
    let inbox = state.inbox_service.create(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(inbox)))
}

/// GET /api/v1/accounts/:account_id/inboxes/:inbox_id
pub async fn get_inbox(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Path((_account_id, inbox_id)): Path<(String, String)>,
) -> ApiResult<Json<Inbox>> {
    let inbox = state.inbox_service.get(&ctx, &inbox_id).await?;
    Ok(Json(inbox))
}

/// PATCH /api/v1/accounts/:account_id/inboxes/:inbox_id
pub async fn update_inbox(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Path((_account_id, inbox_id)): Path<(String, String)>,
    Json(request): Json<UpdateInbox>,
) -> ApiResult<Json<Inbox>> {
    let inbox = state.inbox_service.update(&ctx, &inbox_id, request).await?;
    Ok(Json(inbox))
}

/// DELETE /api/v1/accounts/:account_id/inboxes/:inbox_id
pub async fn delete_inbox(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Path((_account_id, inbox_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state.inbox_service.delete(&ctx, &inbox_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/accounts/:account_id/inboxes/:inbox_id/assignable_agents
pub async fn list_assignable_agents(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Path((_account_id, inbox_id)): Path<(String, String)>,
) -> ApiResult<Json<AssignableAgentsResponse>> {
    let agents = state.inbox_service.assignable_agents(&ctx, &inbox_id).await?;
    Ok(Json(AssignableAgentsResponse { agents }))
}
