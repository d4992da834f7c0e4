use crate::application::services::{CustomAttributeService, InboxService, UserContextService};
use crate::domain::entities::ActorRef;
use crate::infrastructure::http::middleware::error::ApiError;
use axum::{
    extract::{Path, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

/// Header carrying the acting user's id, set by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the acting agent bot's id, set by the upstream gateway.
pub const AGENT_BOT_ID_HEADER: &str = "x-agent-bot-id";

#[derive(Clone)]
pub struct AppState {
    pub custom_attribute_service: CustomAttributeService,
    pub inbox_service: InboxService,
    pub user_context_service: UserContextService,
}

/// Reads the caller identity. A user id wins over a bot id.
pub fn actor_from_headers(headers: &HeaderMap) -> Result<ActorRef, ApiError> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    if let Some(user_id) = header(USER_ID_HEADER) {
        return Ok(ActorRef::User(user_id));
    }
    if let Some(bot_id) = header(AGENT_BOT_ID_HEADER) {
        return Ok(ActorRef::AgentBot(bot_id));
    }
    Err(ApiError::Unauthorized)
}

/// Resolves the `:account_id` route segment and the caller headers into a
/// `UserContext` stored in request extensions.
pub async fn load_user_context(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let account_id = params
        .get("account_id")
        .ok_or_else(|| ApiError::BadRequest("Missing account_id".to_string()))?;

    let actor = actor_from_headers(request.headers())?;
    let context = state.user_context_service.load(account_id, actor).await?;

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_actor_prefers_user_header() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("user-1"));
        headers.insert(AGENT_BOT_ID_HEADER, HeaderValue::from_static("bot-1"));

        assert_eq!(
            actor_from_headers(&headers).unwrap(),
            ActorRef::User("user-1".to_string())
        );
    }

    #[test]
    fn test_actor_falls_back_to_bot_header() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("  "));
        headers.insert(AGENT_BOT_ID_HEADER, HeaderValue::from_static("bot-1"));

        assert_eq!(
            actor_from_headers(&headers).unwrap(),
            ActorRef::AgentBot("bot-1".to_string())
        );
    }

    #[test]
    fn test_missing_identity_is_unauthorized() {
        assert!(matches!(
            actor_from_headers(&HeaderMap::new()),
            Err(ApiError::Unauthorized)
        ));
    }
}
