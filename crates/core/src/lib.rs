//! Core contracts for the authgate gateway.
//!
//! This crate holds the pure half of the gateway:
//! - Session and identity types exchanged with the upstream provider
//! - The error taxonomy shared by every layer
//! - The capability traits and the mode-discriminated client factory
//! - Cookie/bearer session extraction (no axum here)

mod capability;
mod error;
mod transport;
mod types;

pub use capability::{AdminCapability, Capability, ClientFactory, Result, UserCapability};
pub use error::GatewayError;
pub use transport::{extract_session, SessionTransport, SESSION_COOKIE};
pub use types::{
    AuthorityMode, Jwt, OAuthProvider, PasswordVerification, PendingOAuthExchange,
    SessionArtifact, SessionSecret, UserIdentity,
};
