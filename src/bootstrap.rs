use crate::application::services::{CustomAttributeService, InboxService, UserContextService};
use crate::domain::ports::account_repository::AccountRepository;
use crate::domain::ports::conversation_repository::ConversationRepository;
use crate::domain::ports::inbox_repository::InboxRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

pub fn build_app_state(db: Database) -> AppState {
    let conversation_repo = Arc::new(db.clone()) as Arc<dyn ConversationRepository>;
    let inbox_repo = Arc::new(db.clone()) as Arc<dyn InboxRepository>;
    let account_repo = Arc::new(db) as Arc<dyn AccountRepository>;

    let custom_attribute_service = CustomAttributeService::new(conversation_repo);
    let inbox_service = InboxService::new(inbox_repo.clone(), account_repo.clone());
    let user_context_service = UserContextService::new(account_repo, inbox_repo);
    tracing::info!("Application services initialized");

    AppState {
        custom_attribute_service,
        inbox_service,
        user_context_service,
    }
}
