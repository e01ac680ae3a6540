//! HTTP handlers, one module per flow group.

pub mod account;
pub mod oauth;
pub mod pages;
pub mod session;
