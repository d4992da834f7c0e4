pub mod context;
pub mod error;

pub use context::*;
pub use error::*;
