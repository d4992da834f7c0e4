use crate::infrastructure::http::middleware::ApiResult;
use crate::domain::entities::{Inbox, InboxMember, User};
use async_trait::async_trait;

#[async_trait]
pub trait InboxRepository: Send + Sync {
    async fn list_account_inboxes(&self, account_id: &str) -> ApiResult<Vec<Inbox>>;
    async fn get_inbox(&self, account_id: &str, inbox_id: &str) -> ApiResult<Option<Inbox>>;
    async fn create_inbox(&self, inbox: &Inbox) -> ApiResult<()>;
    async fn update_inbox(&self, inbox: &Inbox) -> ApiResult<()>;
    async fn delete_inbox(&self, inbox_id: &str) -> ApiResult<()>;
    async fn add_inbox_member(&self, inbox_id: &str, user_id: &str) -> ApiResult<()>;
    async fn list_memberships_for_user(&self, user_id: &str) -> ApiResult<Vec<InboxMember>>;
    async fn list_inbox_member_users(&self, inbox_id: &str) -> ApiResult<Vec<User>>;
}
