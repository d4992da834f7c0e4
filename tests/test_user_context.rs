use deskattrs::application::services::UserContextService;
use deskattrs::domain::entities::{AccountRole, ActorRef};
use deskattrs::domain::policies::{InboxAction, InboxPolicy, InboxScope};
use deskattrs::domain::ports::inbox_repository::InboxRepository;
use deskattrs::infrastructure::http::middleware::ApiError;
use std::sync::Arc;

mod helpers;
use helpers::*;

fn service(test_db: &TestDatabase) -> UserContextService {
    let db = test_db.db();
    UserContextService::new(Arc::new(db.clone()), Arc::new(db))
}

#[tokio::test]
async fn test_agent_assigned_inboxes_are_memberships_within_account() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let acme = create_test_account(&db, "Acme").await;
    let globex = create_test_account(&db, "Globex").await;
    let agent = create_test_member(&db, &acme, AccountRole::Agent).await;

    let support = create_test_inbox(&db, &acme, "Support").await;
    let _sales = create_test_inbox(&db, &acme, "Sales").await;
    let foreign = create_test_inbox(&db, &globex, "Globex Support").await;
    add_test_member(&db, &support, &agent).await;
    add_test_member(&db, &foreign, &agent).await;

    let ctx = service(&test_db)
        .load(&acme.id, ActorRef::User(agent.id.clone()))
        .await
        .unwrap();

    assert!(!ctx.is_administrator());
    assert_eq!(ctx.assigned_inbox_ids.len(), 1);
    assert!(ctx.assigned_inbox_ids.contains(&support.id));
    assert!(InboxPolicy::new(&ctx, &support).authorize(InboxAction::Show));
    assert!(!InboxPolicy::new(&ctx, &foreign).authorize(InboxAction::Show));
}

#[tokio::test]
async fn test_administrator_context_allows_admin_actions() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let account = create_test_account(&db, "Acme").await;
    let admin = create_test_member(&db, &account, AccountRole::Administrator).await;
    let inbox = create_test_inbox(&db, &account, "Support").await;

    let ctx = service(&test_db)
        .load(&account.id, ActorRef::User(admin.id.clone()))
        .await
        .unwrap();

    let policy = InboxPolicy::new(&ctx, &inbox);
    assert!(ctx.assigned_inbox_ids.contains(&inbox.id));
    assert!(policy.campaigns());
    assert!(policy.set_agent_bot());
    assert!(policy.avatar());
}

#[tokio::test]
async fn test_bot_context_has_no_membership() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let account = create_test_account(&db, "Acme").await;
    let bot = create_test_agent_bot(&db).await;

    let ctx = service(&test_db)
        .load(&account.id, ActorRef::AgentBot(bot.id.clone()))
        .await
        .unwrap();

    assert!(ctx.actor.is_agent_bot());
    assert!(ctx.account_user.is_none());
    assert!(!ctx.is_administrator());
}

#[tokio::test]
async fn test_unknown_actor_or_account() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let account = create_test_account(&db, "Acme").await;
    let outsider = create_test_user_without_account(&db).await;
    let service = service(&test_db);

    assert!(matches!(
        service.load(&account.id, ActorRef::User("ghost".into())).await,
        Err(ApiError::Unauthorized)
    ));
    assert!(matches!(
        service.load(&account.id, ActorRef::AgentBot("ghost".into())).await,
        Err(ApiError::Unauthorized)
    ));
    assert!(matches!(
        service.load(&account.id, ActorRef::User(outsider.id.clone())).await,
        Err(ApiError::Forbidden(_))
    ));
    assert!(matches!(
        service.load("nope", ActorRef::User(outsider.id)).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_scope_over_stored_memberships_dedupes_rows() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let account = create_test_account(&db, "Acme").await;
    let agent = create_test_member(&db, &account, AccountRole::Agent).await;
    let support = create_test_inbox(&db, &account, "Support").await;
    let _sales = create_test_inbox(&db, &account, "Sales").await;
    for _ in 0..3 {
        add_test_member(&db, &support, &agent).await;
    }

    let ctx = service(&test_db)
        .load(&account.id, ActorRef::User(agent.id.clone()))
        .await
        .unwrap();
    let memberships = db.list_memberships_for_user(&agent.id).await.unwrap();
    assert_eq!(memberships.len(), 3);

    let inboxes = db.list_account_inboxes(&account.id).await.unwrap();
    let resolved = InboxScope::new(&ctx).resolve(inboxes, &memberships);

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, support.id);
}
