//! Value Object Module

pub mod email;
pub mod user_name;
pub mod user_password;

/// Account identifier shared with the quiz crate
pub use kernel::id::{AccountId, SessionId};
