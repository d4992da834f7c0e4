pub mod custom_attributes;
pub mod inboxes;
