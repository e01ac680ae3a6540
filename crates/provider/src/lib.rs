//! HTTP client for the upstream identity provider.
//!
//! Implements the `authgate_core` capability traits over an
//! Appwrite-compatible REST API. The gateway consumes the provider only
//! through this narrow surface; user storage, password hashing, OAuth token
//! exchange, and JWT minting all happen upstream.

mod admin;
mod client;
mod user;

pub use client::IdentityProvider;
