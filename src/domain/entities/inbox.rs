use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inbox {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub channel_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Inbox {
    pub fn new(account_id: String, name: String, channel_type: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            account_id,
            name,
            channel_type,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// One row of the inbox membership relation. Rows are not unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboxMember {
    pub inbox_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInbox {
    pub name: String,
    pub channel_type: String,
}

impl CreateInbox {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Inbox name cannot be empty".to_string(),
            ));
        }
        if self.channel_type.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Inbox channel_type cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInbox {
    pub name: Option<String>,
    pub channel_type: Option<String>,
}

impl UpdateInbox {
    pub fn validate(&self) -> DomainResult<()> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(DomainError::ValidationError(
                "Inbox name cannot be empty".to_string(),
            ));
        }
        if matches!(&self.channel_type, Some(channel_type) if channel_type.trim().is_empty()) {
            return Err(DomainError::ValidationError(
                "Inbox channel_type cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn apply(self, inbox: &mut Inbox) {
        if let Some(name) = self.name {
            inbox.name = name;
        }
        if let Some(channel_type) = self.channel_type {
            inbox.channel_type = channel_type;
        }
        inbox.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxListResponse {
    pub inboxes: Vec<Inbox>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignableAgentsResponse {
    pub agents: Vec<crate::domain::entities::User>,
}
