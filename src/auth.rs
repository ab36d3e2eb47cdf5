//! Credential domain types shared by the client, stores, and login flows.

pub mod credentials;
pub mod identity;
pub mod secret;

pub use credentials::{Credentials, SessionGrant};
pub use identity::UserIdentity;
pub use secret::TokenSecret;
