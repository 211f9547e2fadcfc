/// Shared kernel - error types, result alias, and boundary helpers
pub mod error;
pub mod escape;
pub mod result;
pub mod security;

pub use result::Result;
