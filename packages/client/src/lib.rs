//! Planning poker client library.
//!
//! A typed client for the planning poker HTTP API plus the command-line
//! front-end built on top of it.

pub mod api;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod runner;
pub mod types;
pub mod vote;
