#![allow(dead_code)]
use deskattrs::domain::entities::{
    Account, AccountRole, AccountUser, AgentBot, Conversation, CreateConversation,
    CustomAttributes, Inbox, User,
};
use deskattrs::domain::ports::account_repository::AccountRepository;
use deskattrs::domain::ports::conversation_repository::ConversationRepository;
use deskattrs::domain::ports::inbox_repository::InboxRepository;
use deskattrs::infrastructure::persistence::Database;
use serde_json::Value;
use uuid::Uuid;

pub async fn create_test_account(db: &Database, name: &str) -> Account {
    let account = Account::new(name.to_string());
    db.create_account(&account)
        .await
        .expect("Failed to create account");
    account
}

/// Creates a user holding `role` in `account`.
pub async fn create_test_member(db: &Database, account: &Account, role: AccountRole) -> User {
    let user = User::new(
        format!("{} user", role),
        format!("{}@example.com", Uuid::new_v4()),
    );
    db.create_user(&user).await.expect("Failed to create user");
    db.create_account_user(&AccountUser::new(account.id.clone(), user.id.clone(), role))
        .await
        .expect("Failed to create account user");
    user
}

pub async fn create_test_user_without_account(db: &Database) -> User {
    let user = User::new(
        "Outsider".to_string(),
        format!("{}@example.com", Uuid::new_v4()),
    );
    db.create_user(&user).await.expect("Failed to create user");
    user
}

pub async fn create_test_agent_bot(db: &Database) -> AgentBot {
    let bot = AgentBot::new("Triage bot".to_string());
    db.create_agent_bot(&bot)
        .await
        .expect("Failed to create agent bot");
    bot
}

pub async fn create_test_inbox(db: &Database, account: &Account, name: &str) -> Inbox {
    let inbox = Inbox::new(account.id.clone(), name.to_string(), "web_widget".to_string());
    db.create_inbox(&inbox).await.expect("Failed to create inbox");
    inbox
}

pub async fn add_test_member(db: &Database, inbox: &Inbox, user: &User) {
    db.add_inbox_member(&inbox.id, &user.id)
        .await
        .expect("Failed to add inbox member");
}

pub fn attributes(value: Value) -> CustomAttributes {
    value
        .as_object()
        .cloned()
        .expect("attributes must be a JSON object")
}

pub async fn create_test_conversation(
    db: &Database,
    inbox: &Inbox,
    custom_attributes: Option<Value>,
) -> Conversation {
    db.create_conversation(&CreateConversation {
        account_id: inbox.account_id.clone(),
        inbox_id: inbox.id.clone(),
        custom_attributes: custom_attributes.map(attributes),
    })
    .await
    .expect("Failed to create conversation")
}
