//! scholia-rest
//!
//! HTTP implementation of the [`scholia_session::Transport`] seam against
//! the Scholia REST backend. Authentication is injected through
//! [`config::TokenProvider`] so no ambient credential storage is read.

pub mod config;
pub mod transport;

pub use config::{Anonymous, RestConfig, StaticToken, TokenProvider};
pub use transport::RestTransport;
