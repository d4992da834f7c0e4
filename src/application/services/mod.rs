pub mod custom_attribute_service;
pub mod inbox_service;
pub mod user_context_service;

pub use custom_attribute_service::*;
pub use inbox_service::*;
pub use user_context_service::*;
