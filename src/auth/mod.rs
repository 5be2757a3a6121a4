//! Authentication
//!
//! Session token storage and advisory claims decoding.

pub mod claims;
pub mod session;

pub use claims::TokenClaims;
pub use session::Session;
