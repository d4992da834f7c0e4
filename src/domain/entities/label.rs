use serde::{Deserialize, Serialize};

/// Column default for `labels.color` and `channel_web_widgets.widget_color`.
pub const DEFAULT_COLOR: &str = "#3a6766";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub id: String,
    pub account_id: String,
    pub title: String,
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
}

/// `color: None` leaves the column to its schema default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLabel {
    pub account_id: String,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebWidget {
    pub id: String,
    pub account_id: String,
    pub website_url: String,
    pub widget_color: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWebWidget {
    pub account_id: String,
    pub website_url: String,
    #[serde(default)]
    pub widget_color: Option<String>,
}
