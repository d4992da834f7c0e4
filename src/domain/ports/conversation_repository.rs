use crate::infrastructure::http::middleware::error::ApiResult;
use crate::domain::entities::{Conversation, CreateConversation};

#[async_trait::async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create_conversation(&self, create: &CreateConversation) -> ApiResult<Conversation>;

    async fn get_conversation_by_id(&self, id: &str) -> ApiResult<Option<Conversation>>;

    /// Writes the whole attribute map back and refreshes `updated_at`.
    /// No version check: the last writer wins.
    async fn save_custom_attributes(&self, conversation: &Conversation) -> ApiResult<Conversation>;
}
