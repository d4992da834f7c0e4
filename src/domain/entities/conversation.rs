use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Free-form key/value annotations attached to a conversation.
/// Values keep whatever JSON shape the caller sent.
pub type CustomAttributes = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Open,
    Resolved,
    Pending,
    Snoozed,
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationStatus::Open => write!(f, "open"),
            ConversationStatus::Resolved => write!(f, "resolved"),
            ConversationStatus::Pending => write!(f, "pending"),
            ConversationStatus::Snoozed => write!(f, "snoozed"),
        }
    }
}

// Convert from string (for SQLx)
impl From<String> for ConversationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "resolved" => ConversationStatus::Resolved,
            "pending" => ConversationStatus::Pending,
            "snoozed" => ConversationStatus::Snoozed,
            _ => ConversationStatus::Open,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub account_id: String,
    pub inbox_id: String,
    pub status: ConversationStatus,
    pub custom_attributes: Option<CustomAttributes>,
    pub created_at: String,
    pub updated_at: String,
}

impl Conversation {
    /// Current attributes, or an empty map when none were ever set.
    pub fn custom_attributes_or_empty(&self) -> CustomAttributes {
        self.custom_attributes.clone().unwrap_or_default()
    }

    /// Shallow merge: incoming keys overwrite, untouched keys are kept.
    pub fn merge_custom_attributes(&mut self, incoming: CustomAttributes) {
        let attributes = self.custom_attributes.get_or_insert_with(Map::new);
        for (key, value) in incoming {
            attributes.insert(key, value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConversation {
    pub account_id: String,
    pub inbox_id: String,
    #[serde(default)]
    pub custom_attributes: Option<CustomAttributes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub id: String,
    pub account_id: String,
    pub inbox_id: String,
    pub status: ConversationStatus,
    pub custom_attributes: CustomAttributes,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Conversation> for ConversationResponse {
    fn from(conv: Conversation) -> Self {
        Self {
            id: conv.id,
            account_id: conv.account_id,
            inbox_id: conv.inbox_id,
            status: conv.status,
            custom_attributes: conv.custom_attributes.unwrap_or_default(),
            created_at: conv.created_at,
            updated_at: conv.updated_at,
        }
    }
}

/// Body of the custom attributes update. Every other field is dropped on
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomAttributesRequest {
    pub custom_attributes: CustomAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conversation_with(attributes: Option<Value>) -> Conversation {
        Conversation {
            id: "conv-42".to_string(),
            account_id: "acct-1".to_string(),
            inbox_id: "inbox-1".to_string(),
            status: ConversationStatus::Open,
            custom_attributes: attributes.map(|v| v.as_object().cloned().unwrap()),
            created_at: "2025-07-09T00:00:00Z".to_string(),
            updated_at: "2025-07-09T00:00:00Z".to_string(),
        }
    }

    fn attrs(value: Value) -> CustomAttributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_initializes_missing_map() {
        let mut conversation = conversation_with(None);
        conversation.merge_custom_attributes(attrs(json!({"tag": "vip"})));

        assert_eq!(
            conversation.custom_attributes,
            Some(attrs(json!({"tag": "vip"})))
        );
    }

    #[test]
    fn test_merge_overwrites_and_keeps_other_keys() {
        let mut conversation = conversation_with(Some(json!({"priority": "low", "plan": "pro"})));
        conversation.merge_custom_attributes(attrs(json!({"priority": "high", "tag": "vip"})));

        assert_eq!(
            conversation.custom_attributes_or_empty(),
            attrs(json!({"priority": "high", "plan": "pro", "tag": "vip"}))
        );
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut conversation = conversation_with(Some(json!({"address": {"city": "Lyon", "zip": "69001"}})));
        conversation.merge_custom_attributes(attrs(json!({"address": {"city": "Paris"}})));

        assert_eq!(
            conversation.custom_attributes_or_empty(),
            attrs(json!({"address": {"city": "Paris"}}))
        );
    }

    #[test]
    fn test_empty_map_when_unset() {
        let conversation = conversation_with(None);
        assert!(conversation.custom_attributes_or_empty().is_empty());

        let response = ConversationResponse::from(conversation);
        assert!(response.custom_attributes.is_empty());
    }

    #[test]
    fn test_update_request_ignores_other_fields() {
        let request: UpdateCustomAttributesRequest = serde_json::from_value(json!({
            "custom_attributes": {"tag": "vip"},
            "status": "resolved",
            "inbox_id": "other"
        }))
        .unwrap();

        assert_eq!(request.custom_attributes, attrs(json!({"tag": "vip"})));
    }
}
