use crate::domain::entities::{Inbox, InboxMember, User};
use crate::domain::ports::inbox_repository::InboxRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn inbox_from_row(row: &AnyRow) -> ApiResult<Inbox> {
    Ok(Inbox {
        id: row.try_get("id")?,
        account_id: row.try_get("account_id")?,
        name: row.try_get("name")?,
        channel_type: row.try_get("channel_type")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl InboxRepository for Database {
    async fn list_account_inboxes(&self, account_id: &str) -> ApiResult<Vec<Inbox>> {
        let rows = sqlx::query(
            "SELECT id, account_id, name, channel_type, created_at, updated_at
             FROM inboxes
             WHERE account_id = $1
             ORDER BY name, id",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(inbox_from_row).collect()
    }

    async fn get_inbox(&self, account_id: &str, inbox_id: &str) -> ApiResult<Option<Inbox>> {
        let row = sqlx::query(
            "SELECT id, account_id, name, channel_type, created_at, updated_at
             FROM inboxes
             WHERE id = $1 AND account_id = $2",
        )
        .bind(inbox_id)
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(inbox_from_row).transpose()
    }

    async fn create_inbox(&self, inbox: &Inbox) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO inboxes (id, account_id, name, channel_type, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&inbox.id)
        .bind(&inbox.account_id)
        .bind(&inbox.name)
        .bind(&inbox.channel_type)
        .bind(&inbox.created_at)
        .bind(&inbox.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_inbox(&self, inbox: &Inbox) -> ApiResult<()> {
        let result = sqlx::query(
            "UPDATE inboxes
             SET name = $1, channel_type = $2, updated_at = $3
             WHERE id = $4",
        )
        .bind(&inbox.name)
        .bind(&inbox.channel_type)
        .bind(&inbox.updated_at)
        .bind(&inbox.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Inbox not found".to_string()));
        }
        Ok(())
    }

    async fn delete_inbox(&self, inbox_id: &str) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM inbox_members WHERE inbox_id = $1")
            .bind(inbox_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM inboxes WHERE id = $1")
            .bind(inbox_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Inbox not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn add_inbox_member(&self, inbox_id: &str, user_id: &str) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO inbox_members (id, inbox_id, user_id, created_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(inbox_id)
        .bind(user_id)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_memberships_for_user(&self, user_id: &str) -> ApiResult<Vec<InboxMember>> {
        let rows = sqlx::query(
            "SELECT inbox_id, user_id
             FROM inbox_members
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut memberships = Vec::with_capacity(rows.len());
        for row in rows {
            memberships.push(InboxMember {
                inbox_id: row.try_get("inbox_id")?,
                user_id: row.try_get("user_id")?,
            });
        }
        Ok(memberships)
    }

    async fn list_inbox_member_users(&self, inbox_id: &str) -> ApiResult<Vec<User>> {
        let rows = sqlx::query(
            "SELECT DISTINCT u.id, u.name, u.email, u.created_at, u.updated_at
             FROM users u
             INNER JOIN inbox_members im ON im.user_id = u.id
             WHERE im.inbox_id = $1
             ORDER BY u.name, u.id",
        )
        .bind(inbox_id)
        .fetch_all(&self.pool)
        .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push(User {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                email: row.try_get("email")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            });
        }
        Ok(users)
    }
}
