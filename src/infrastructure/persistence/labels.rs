use crate::domain::entities::{CreateLabel, CreateWebWidget, Label, WebWidget};
use crate::domain::ports::label_repository::LabelRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

// Colors are only written when the caller gives one, so the column default
// applies otherwise.
#[async_trait]
impl LabelRepository for Database {
    async fn create_label(&self, create: &CreateLabel) -> ApiResult<Label> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();

        match &create.color {
            Some(color) => {
                sqlx::query(
                    "INSERT INTO labels (id, account_id, title, color, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(&id)
                .bind(&create.account_id)
                .bind(&create.title)
                .bind(color)
                .bind(&now)
                .bind(&now)
                .execute(&self.pool)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO labels (id, account_id, title, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(&id)
                .bind(&create.account_id)
                .bind(&create.title)
                .bind(&now)
                .bind(&now)
                .execute(&self.pool)
                .await?;
            }
        }

        self.get_label(&id)
            .await?
            .ok_or_else(|| ApiError::Internal("Label missing after insert".to_string()))
    }

    async fn get_label(&self, id: &str) -> ApiResult<Option<Label>> {
        let row = sqlx::query(
            "SELECT id, account_id, title, color, created_at, updated_at
             FROM labels
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Label {
                id: row.try_get("id")?,
                account_id: row.try_get("account_id")?,
                title: row.try_get("title")?,
                color: row.try_get("color")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn create_web_widget(&self, create: &CreateWebWidget) -> ApiResult<WebWidget> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();

        match &create.widget_color {
            Some(color) => {
                sqlx::query(
                    "INSERT INTO channel_web_widgets (id, account_id, website_url, widget_color, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(&id)
                .bind(&create.account_id)
                .bind(&create.website_url)
                .bind(color)
                .bind(&now)
                .bind(&now)
                .execute(&self.pool)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO channel_web_widgets (id, account_id, website_url, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(&id)
                .bind(&create.account_id)
                .bind(&create.website_url)
                .bind(&now)
                .bind(&now)
                .execute(&self.pool)
                .await?;
            }
        }

        self.get_web_widget(&id)
            .await?
            .ok_or_else(|| ApiError::Internal("Web widget missing after insert".to_string()))
    }

    async fn get_web_widget(&self, id: &str) -> ApiResult<Option<WebWidget>> {
        let row = sqlx::query(
            "SELECT id, account_id, website_url, widget_color, created_at, updated_at
             FROM channel_web_widgets
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(WebWidget {
                id: row.try_get("id")?,
                account_id: row.try_get("account_id")?,
                website_url: row.try_get("website_url")?,
                widget_color: row.try_get("widget_color")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }
}
