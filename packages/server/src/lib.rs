//! Planning poker session server.
//!
//! Participants join the single current session and vote with a fixed card
//! deck while a password-authenticated host moves the session through
//! `waiting → voting → ended → waiting`.

// layers
pub mod domain;
pub mod infrastructure;
pub mod task;
pub mod ui;
pub mod usecase;

// wiring
pub mod app;
pub mod config;
