use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Account {
    pub fn new(name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Automated, non-human actor acting on inboxes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentBot {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl AgentBot {
    pub fn new(name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Agent,
    Administrator,
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Agent => write!(f, "agent"),
            AccountRole::Administrator => write!(f, "administrator"),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "agent" => Ok(AccountRole::Agent),
            "administrator" => Ok(AccountRole::Administrator),
            _ => Err(format!("Invalid account role: {}", s)),
        }
    }
}

/// A user's membership in one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountUser {
    pub account_id: String,
    pub user_id: String,
    pub role: AccountRole,
    pub created_at: String,
}

impl AccountUser {
    pub fn new(account_id: String, user_id: String, role: AccountRole) -> Self {
        Self {
            account_id,
            user_id,
            role,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn administrator(&self) -> bool {
        self.role == AccountRole::Administrator
    }
}
