use crate::domain::entities::{Actor, ActorRef, UserContext};
use crate::domain::ports::account_repository::AccountRepository;
use crate::domain::ports::inbox_repository::InboxRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use std::collections::HashSet;
use std::sync::Arc;

/// Builds the request-scoped [`UserContext`] the inbox policy runs against.
#[derive(Clone)]
pub struct UserContextService {
    account_repo: Arc<dyn AccountRepository>,
    inbox_repo: Arc<dyn InboxRepository>,
}

impl UserContextService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        inbox_repo: Arc<dyn InboxRepository>,
    ) -> Self {
        Self {
            account_repo,
            inbox_repo,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn load(&self, account_id: &str, actor: ActorRef) -> ApiResult<UserContext> {
        let account = self
            .account_repo
            .get_account(account_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Account {} not found", account_id)))?;

        match actor {
            ActorRef::AgentBot(bot_id) => {
                let bot = self
                    .account_repo
                    .get_agent_bot_by_id(&bot_id)
                    .await?
                    .ok_or(ApiError::Unauthorized)?;

                Ok(UserContext {
                    actor: Actor::AgentBot(bot),
                    account,
                    account_user: None,
                    assigned_inbox_ids: HashSet::new(),
                })
            }
            ActorRef::User(user_id) => {
                let user = self
                    .account_repo
                    .get_user_by_id(&user_id)
                    .await?
                    .ok_or(ApiError::Unauthorized)?;

                let account_user = self
                    .account_repo
                    .get_account_user(&account.id, &user.id)
                    .await?
                    .ok_or_else(|| {
                        ApiError::Forbidden(format!(
                            "User {} is not a member of account {}",
                            user.id, account.id
                        ))
                    })?;

                let account_inboxes = self.inbox_repo.list_account_inboxes(&account.id).await?;
                let assigned_inbox_ids: HashSet<String> = if account_user.administrator() {
                    account_inboxes.into_iter().map(|inbox| inbox.id).collect()
                } else {
                    let member_of: HashSet<String> = self
                        .inbox_repo
                        .list_memberships_for_user(&user.id)
                        .await?
                        .into_iter()
                        .map(|m| m.inbox_id)
                        .collect();
                    account_inboxes
                        .into_iter()
                        .map(|inbox| inbox.id)
                        .filter(|id| member_of.contains(id))
                        .collect()
                };

                tracing::debug!(
                    "User context loaded: user_id={}, role={}, assigned_inboxes={}",
                    user.id,
                    account_user.role,
                    assigned_inbox_ids.len()
                );

                Ok(UserContext {
                    actor: Actor::User(user),
                    account,
                    account_user: Some(account_user),
                    assigned_inbox_ids,
                })
            }
        }
    }
}
