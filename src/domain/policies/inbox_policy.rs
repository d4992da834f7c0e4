use crate::domain::entities::{Inbox, InboxMember, UserContext};
use crate::domain::errors::DomainError;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Every action an inbox route can ask the policy about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InboxAction {
    Index,
    Show,
    AssignableAgents,
    AgentBot,
    Campaigns,
    Create,
    Update,
    Destroy,
    SetAgentBot,
    Avatar,
}

impl InboxAction {
    pub const ALL: [InboxAction; 10] = [
        InboxAction::Index,
        InboxAction::Show,
        InboxAction::AssignableAgents,
        InboxAction::AgentBot,
        InboxAction::Campaigns,
        InboxAction::Create,
        InboxAction::Update,
        InboxAction::Destroy,
        InboxAction::SetAgentBot,
        InboxAction::Avatar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InboxAction::Index => "index",
            InboxAction::Show => "show",
            InboxAction::AssignableAgents => "assignable_agents",
            InboxAction::AgentBot => "agent_bot",
            InboxAction::Campaigns => "campaigns",
            InboxAction::Create => "create",
            InboxAction::Update => "update",
            InboxAction::Destroy => "destroy",
            InboxAction::SetAgentBot => "set_agent_bot",
            InboxAction::Avatar => "avatar",
        }
    }

    /// Administrator-only actions.
    pub fn requires_administrator(&self) -> bool {
        matches!(
            self,
            InboxAction::Campaigns
                | InboxAction::Create
                | InboxAction::Update
                | InboxAction::Destroy
                | InboxAction::SetAgentBot
                | InboxAction::Avatar
        )
    }
}

impl fmt::Display for InboxAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InboxAction {
    type Err = DomainError;

    /// Accepts both `show` and `show?`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix('?').unwrap_or(s);
        InboxAction::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| DomainError::ValidationError(format!("Unknown inbox action: {}", s)))
    }
}

/// Yes/no answers for a user context against one inbox, or against the
/// inbox collection when there is no record yet (index, create).
pub struct InboxPolicy<'a> {
    context: &'a UserContext,
    record: Option<&'a Inbox>,
}

impl<'a> InboxPolicy<'a> {
    pub fn new(context: &'a UserContext, record: &'a Inbox) -> Self {
        Self {
            context,
            record: Some(record),
        }
    }

    pub fn for_collection(context: &'a UserContext) -> Self {
        Self {
            context,
            record: None,
        }
    }

    pub fn authorize(&self, action: InboxAction) -> bool {
        match action {
            InboxAction::Index => self.index(),
            InboxAction::Show => self.show(),
            InboxAction::AssignableAgents => self.assignable_agents(),
            InboxAction::AgentBot => self.agent_bot(),
            InboxAction::Campaigns => self.campaigns(),
            InboxAction::Create => self.create(),
            InboxAction::Update => self.update(),
            InboxAction::Destroy => self.destroy(),
            InboxAction::SetAgentBot => self.set_agent_bot(),
            InboxAction::Avatar => self.avatar(),
        }
    }

    pub fn index(&self) -> bool {
        true
    }

    pub fn show(&self) -> bool {
        if self.context.actor.is_agent_bot() {
            return true;
        }

        self.record
            .map(|inbox| self.context.assigned_inbox_ids.contains(&inbox.id))
            .unwrap_or(false)
    }

    pub fn assignable_agents(&self) -> bool {
        true
    }

    pub fn agent_bot(&self) -> bool {
        true
    }

    pub fn campaigns(&self) -> bool {
        self.context.is_administrator()
    }

    pub fn create(&self) -> bool {
        self.context.is_administrator()
    }

    pub fn update(&self) -> bool {
        self.context.is_administrator()
    }

    pub fn destroy(&self) -> bool {
        self.context.is_administrator()
    }

    pub fn set_agent_bot(&self) -> bool {
        self.context.is_administrator()
    }

    pub fn avatar(&self) -> bool {
        self.context.is_administrator()
    }
}

/// Narrows a collection of inboxes to the ones the actor is a member of.
pub struct InboxScope<'a> {
    context: &'a UserContext,
}

impl<'a> InboxScope<'a> {
    pub fn new(context: &'a UserContext) -> Self {
        Self { context }
    }

    /// Keeps input order; duplicate inboxes or duplicate membership rows
    /// never yield the same inbox twice.
    pub fn resolve<I>(&self, inboxes: I, memberships: &[InboxMember]) -> Vec<Inbox>
    where
        I: IntoIterator<Item = Inbox>,
    {
        let actor_id = self.context.actor.id();
        let member_of: HashSet<&str> = memberships
            .iter()
            .filter(|m| m.user_id == actor_id)
            .map(|m| m.inbox_id.as_str())
            .collect();

        let mut seen = HashSet::new();
        inboxes
            .into_iter()
            .filter(|inbox| member_of.contains(inbox.id.as_str()))
            .filter(|inbox| seen.insert(inbox.id.clone()))
            .collect()
    }
}
