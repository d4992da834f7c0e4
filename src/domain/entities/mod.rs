pub mod conversation;
pub mod inbox;
pub mod label;
pub mod user;
pub mod user_context;

pub use conversation::*;
pub use inbox::*;
pub use label::*;
pub use user::*;
pub use user_context::*;
