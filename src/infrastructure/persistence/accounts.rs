use crate::domain::entities::{Account, AccountRole, AccountUser, AgentBot, User};
use crate::domain::ports::account_repository::AccountRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn user_from_row(row: &AnyRow) -> ApiResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl AccountRepository for Database {
    async fn create_account(&self, account: &Account) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO accounts (id, name, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&account.id)
        .bind(&account.name)
        .bind(&account.created_at)
        .bind(&account.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_account(&self, id: &str) -> ApiResult<Option<Account>> {
        let row = sqlx::query("SELECT id, name, created_at, updated_at FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(row) = row {
            Ok(Some(Account {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn create_user(&self, user: &User) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO users (id, name, email, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.created_at)
        .bind(&user.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_user_by_id(&self, id: &str) -> ApiResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn create_agent_bot(&self, bot: &AgentBot) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO agent_bots (id, name, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&bot.id)
        .bind(&bot.name)
        .bind(&bot.created_at)
        .bind(&bot.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_agent_bot_by_id(&self, id: &str) -> ApiResult<Option<AgentBot>> {
        let row =
            sqlx::query("SELECT id, name, created_at, updated_at FROM agent_bots WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        if let Some(row) = row {
            Ok(Some(AgentBot {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn create_account_user(&self, account_user: &AccountUser) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO account_users (account_id, user_id, role, created_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&account_user.account_id)
        .bind(&account_user.user_id)
        .bind(account_user.role.to_string())
        .bind(&account_user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_account_user(
        &self,
        account_id: &str,
        user_id: &str,
    ) -> ApiResult<Option<AccountUser>> {
        let row = sqlx::query(
            "SELECT account_id, user_id, role, created_at
             FROM account_users
             WHERE account_id = $1 AND user_id = $2",
        )
        .bind(account_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            let role = row
                .try_get::<String, _>("role")?
                .parse::<AccountRole>()
                .map_err(ApiError::Internal)?;

            Ok(Some(AccountUser {
                account_id: row.try_get("account_id")?,
                user_id: row.try_get("user_id")?,
                role,
                created_at: row.try_get("created_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn list_account_administrators(&self, account_id: &str) -> ApiResult<Vec<User>> {
        let rows = sqlx::query(
            "SELECT u.id, u.name, u.email, u.created_at, u.updated_at
             FROM users u
             INNER JOIN account_users au ON au.user_id = u.id
             WHERE au.account_id = $1 AND au.role = 'administrator'
             ORDER BY u.name, u.id",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }
}
