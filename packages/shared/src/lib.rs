//! Shared utilities for the Mitsumori server and client.

pub mod logger;
pub mod time;
