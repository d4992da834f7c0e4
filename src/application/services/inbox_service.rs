use crate::domain::entities::{CreateInbox, Inbox, UpdateInbox, User, UserContext};
use crate::domain::policies::{InboxAction, InboxPolicy, InboxScope};
use crate::domain::ports::account_repository::AccountRepository;
use crate::domain::ports::inbox_repository::InboxRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use std::collections::HashSet;
use std::sync::Arc;

/// Inbox operations, each gated by the [`InboxPolicy`] predicate of the
/// same name.
#[derive(Clone)]
pub struct InboxService {
    inbox_repo: Arc<dyn InboxRepository>,
    account_repo: Arc<dyn AccountRepository>,
}

impl InboxService {
    pub fn new(
        inbox_repo: Arc<dyn InboxRepository>,
        account_repo: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            inbox_repo,
            account_repo,
        }
    }

    fn authorize(policy: &InboxPolicy<'_>, ctx: &UserContext, action: InboxAction) -> ApiResult<()> {
        if policy.authorize(action) {
            return Ok(());
        }

        metrics::counter!("inbox_policy_denials_total", "action" => action.as_str()).increment(1);
        tracing::warn!(
            "Inbox policy denied: actor_id={}, account_id={}, action={}",
            ctx.actor.id(),
            ctx.account.id,
            action
        );
        Err(ApiError::Forbidden(format!("Not allowed to {} inbox", action)))
    }

    async fn find(&self, ctx: &UserContext, inbox_id: &str) -> ApiResult<Inbox> {
        self.inbox_repo
            .get_inbox(&ctx.account.id, inbox_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Inbox {} not found", inbox_id)))
    }

    #[tracing::instrument(skip(self, ctx), fields(account_id = %ctx.account.id))]
    pub async fn list(&self, ctx: &UserContext) -> ApiResult<Vec<Inbox>> {
        Self::authorize(&InboxPolicy::for_collection(ctx), ctx, InboxAction::Index)?;

        let inboxes = self.inbox_repo.list_account_inboxes(&ctx.account.id).await?;
        let memberships = self
            .inbox_repo
            .list_memberships_for_user(ctx.actor.id())
            .await?;

        Ok(InboxScope::new(ctx).resolve(inboxes, &memberships))
    }

    #[tracing::instrument(skip(self, ctx), fields(account_id = %ctx.account.id))]
    pub async fn get(&self, ctx: &UserContext, inbox_id: &str) -> ApiResult<Inbox> {
        let inbox = self.find(ctx, inbox_id).await?;
        Self::authorize(&InboxPolicy::new(ctx, &inbox), ctx, InboxAction::Show)?;
        Ok(inbox)
    }

    #[tracing::instrument(skip(self, ctx, request), fields(account_id = %ctx.account.id))]
    pub async fn create(&self, ctx: &UserContext, request: CreateInbox) -> ApiResult<Inbox> {
        Self::authorize(&InboxPolicy::for_collection(ctx), ctx, InboxAction::Create)?;
        request.validate()?;

        let inbox = Inbox::new(ctx.account.id.clone(), request.name, request.channel_type);

        self.inbox_repo.create_inbox(&inbox).await?;
        tracing::info!("Inbox created: id={}, name={}", inbox.id, inbox.name);
        Ok(inbox)
    }

    #[tracing::instrument(skip(self, ctx, request), fields(account_id = %ctx.account.id))]
    pub async fn update(
        &self,
        ctx: &UserContext,
        inbox_id: &str,
        request: UpdateInbox,
    ) -> ApiResult<Inbox> {
        let mut inbox = self.find(ctx, inbox_id).await?;
        Self::authorize(&InboxPolicy::new(ctx, &inbox), ctx, InboxAction::Update)?;

        request.validate()?;
        request.apply(&mut inbox);
        self.inbox_repo.update_inbox(&inbox).await?;
        Ok(inbox)
    }

    #[tracing::instrument(skip(self, ctx), fields(account_id = %ctx.account.id))]
    pub async fn delete(&self, ctx: &UserContext, inbox_id: &str) -> ApiResult<()> {
        let inbox = self.find(ctx, inbox_id).await?;
        Self::authorize(&InboxPolicy::new(ctx, &inbox), ctx, InboxAction::Destroy)?;

        self.inbox_repo.delete_inbox(&inbox.id).await?;
        tracing::info!("Inbox deleted: id={}", inbox.id);
        Ok(())
    }

    /// Inbox members plus account administrators, each listed once.
    #[tracing::instrument(skip(self, ctx), fields(account_id = %ctx.account.id))]
    pub async fn assignable_agents(&self, ctx: &UserContext, inbox_id: &str) -> ApiResult<Vec<User>> {
        let inbox = self.find(ctx, inbox_id).await?;
        Self::authorize(
            &InboxPolicy::new(ctx, &inbox),
            ctx,
            InboxAction::AssignableAgents,
        )?;

        let members = self.inbox_repo.list_inbox_member_users(&inbox.id).await?;
        let administrators = self
            .account_repo
            .list_account_administrators(&ctx.account.id)
            .await?;

        let mut seen = HashSet::new();
        Ok(members
            .into_iter()
            .chain(administrators)
            .filter(|user| seen.insert(user.id.clone()))
            .collect())
    }
}
