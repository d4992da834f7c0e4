use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    domain::entities::{ConversationResponse, CustomAttributes, UpdateCustomAttributesRequest},
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// GET /api/v1/conversations/:conversation_id/custom_attributes
pub async fn show_custom_attributes(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<CustomAttributes>> {
    let attributes = state
        .custom_attribute_service
        .show(&conversation_id)
        .await?;

    Ok(Json(attributes))
}

/// PATCH|PUT /api/v1/conversations/:conversation_id/custom_attributes
pub async fn update_custom_attributes(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(request): Json<UpdateCustomAttributesRequest>,
) -> ApiResult<Json<ConversationResponse>> {
    let conversation = state
        .custom_attribute_service
        .update(&conversation_id, request.custom_attributes)
        .await?;

    Ok(Json(ConversationResponse::from(conversation)))
}
