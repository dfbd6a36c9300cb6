//! scholia-core
//!
//! Pure domain types for the Scholia chat client: conversations, messages,
//! and the pagination envelope the backend wraps listings in. No I/O — this
//! is the shared vocabulary of the Scholia crates.

pub mod models;
