use crate::infrastructure::http::middleware::ApiResult;
use crate::domain::entities::{Account, AccountUser, AgentBot, User};
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(&self, account: &Account) -> ApiResult<()>;
    async fn get_account(&self, id: &str) -> ApiResult<Option<Account>>;

    async fn create_user(&self, user: &User) -> ApiResult<()>;
    async fn get_user_by_id(&self, id: &str) -> ApiResult<Option<User>>;

    async fn create_agent_bot(&self, bot: &AgentBot) -> ApiResult<()>;
    async fn get_agent_bot_by_id(&self, id: &str) -> ApiResult<Option<AgentBot>>;

    async fn create_account_user(&self, account_user: &AccountUser) -> ApiResult<()>;
    async fn get_account_user(
        &self,
        account_id: &str,
        user_id: &str,
    ) -> ApiResult<Option<AccountUser>>;
    async fn list_account_administrators(&self, account_id: &str) -> ApiResult<Vec<User>>;
}
