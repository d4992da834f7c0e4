pub mod inbox_policy;

pub use inbox_policy::{InboxAction, InboxPolicy, InboxScope};
