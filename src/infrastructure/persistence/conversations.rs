use crate::domain::entities::{Conversation, ConversationStatus, CreateConversation, CustomAttributes};
use crate::domain::ports::conversation_repository::ConversationRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn encode_attributes(attributes: Option<&CustomAttributes>) -> ApiResult<Option<String>> {
    attributes
        .map(serde_json::to_string)
        .transpose()
        .map_err(ApiError::from)
}

fn conversation_from_row(row: &AnyRow) -> ApiResult<Conversation> {
    let custom_attributes = row
        .try_get::<Option<String>, _>("custom_attributes")?
        .map(|raw| serde_json::from_str::<CustomAttributes>(&raw))
        .transpose()?;

    Ok(Conversation {
        id: row.try_get("id")?,
        account_id: row.try_get("account_id")?,
        inbox_id: row.try_get("inbox_id")?,
        status: ConversationStatus::from(row.try_get::<String, _>("status")?),
        custom_attributes,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl ConversationRepository for Database {
    async fn create_conversation(&self, create: &CreateConversation) -> ApiResult<Conversation> {
        let conversation_id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        let attributes = encode_attributes(create.custom_attributes.as_ref())?;

        tracing::debug!(
            "Creating conversation for account_id={}, inbox_id={}",
            create.account_id,
            create.inbox_id
        );

        sqlx::query(
            "INSERT INTO conversations (id, account_id, inbox_id, status, custom_attributes, created_at, updated_at)
             VALUES ($1, $2, $3, 'open', $4, $5, $6)",
        )
        .bind(&conversation_id)
        .bind(&create.account_id)
        .bind(&create.inbox_id)
        .bind(attributes)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.get_conversation_by_id(&conversation_id)
            .await?
            .ok_or_else(|| ApiError::Internal("Conversation missing after insert".to_string()))
    }

    async fn get_conversation_by_id(&self, id: &str) -> ApiResult<Option<Conversation>> {
        let row = sqlx::query(
            "SELECT id, account_id, inbox_id, status, custom_attributes, created_at, updated_at
             FROM conversations
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(conversation_from_row).transpose()
    }

    async fn save_custom_attributes(&self, conversation: &Conversation) -> ApiResult<Conversation> {
        let attributes = encode_attributes(conversation.custom_attributes.as_ref())?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE conversations
             SET custom_attributes = $1, updated_at = $2
             WHERE id = $3",
        )
        .bind(attributes)
        .bind(&now)
        .bind(&conversation.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Conversation {} not found",
                conversation.id
            )));
        }

        self.get_conversation_by_id(&conversation.id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Conversation not found after update".to_string()))
    }
}
