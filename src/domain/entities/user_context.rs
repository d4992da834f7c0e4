use crate::domain::entities::{Account, AccountUser, AgentBot, User};
use std::collections::HashSet;

/// Who is acting on the request.
#[derive(Debug, Clone)]
pub enum Actor {
    User(User),
    AgentBot(AgentBot),
}

impl Actor {
    pub fn id(&self) -> &str {
        match self {
            Actor::User(user) => &user.id,
            Actor::AgentBot(bot) => &bot.id,
        }
    }

    pub fn is_agent_bot(&self) -> bool {
        matches!(self, Actor::AgentBot(_))
    }
}

/// Unresolved actor reference, as supplied by the upstream gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRef {
    User(String),
    AgentBot(String),
}

/// Request-scoped authorization context handed to policies.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub actor: Actor,
    pub account: Account,
    pub account_user: Option<AccountUser>,
    pub assigned_inbox_ids: HashSet<String>,
}

impl UserContext {
    pub fn is_administrator(&self) -> bool {
        self.account_user
            .as_ref()
            .map(AccountUser::administrator)
            .unwrap_or(false)
    }
}
