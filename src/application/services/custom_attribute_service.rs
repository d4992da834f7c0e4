use crate::domain::entities::{Conversation, CustomAttributes};
use crate::domain::ports::conversation_repository::ConversationRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomAttributeService {
    conversation_repo: Arc<dyn ConversationRepository>,
}

impl CustomAttributeService {
    pub fn new(conversation_repo: Arc<dyn ConversationRepository>) -> Self {
        Self { conversation_repo }
    }

    async fn find_conversation(&self, conversation_id: &str) -> ApiResult<Conversation> {
        self.conversation_repo
            .get_conversation_by_id(conversation_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Conversation {} not found", conversation_id))
            })
    }

    /// Current attributes of the conversation, `{}` when none are set.
    #[tracing::instrument(skip(self))]
    pub async fn show(&self, conversation_id: &str) -> ApiResult<CustomAttributes> {
        let conversation = self.find_conversation(conversation_id).await?;
        Ok(conversation.custom_attributes_or_empty())
    }

    /// Merges `incoming` over the stored attributes and saves the
    /// conversation.
    #[tracing::instrument(skip(self, incoming), fields(keys = incoming.len()))]
    pub async fn update(
        &self,
        conversation_id: &str,
        incoming: CustomAttributes,
    ) -> ApiResult<Conversation> {
        let mut conversation = self.find_conversation(conversation_id).await?;
        conversation.merge_custom_attributes(incoming);

        let saved = self
            .conversation_repo
            .save_custom_attributes(&conversation)
            .await?;

        metrics::counter!("custom_attributes_updates_total").increment(1);
        tracing::info!(
            "Custom attributes updated: conversation_id={}, keys={}",
            saved.id,
            saved.custom_attributes.as_ref().map(|a| a.len()).unwrap_or(0)
        );

        Ok(saved)
    }
}
