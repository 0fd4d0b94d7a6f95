//! Data Transfer Objects (DTOs) for the planning poker API.
//!
//! - `http`: HTTP request/response DTOs
//! - `conversion`: mapping between DTOs and domain models

pub mod conversion;
pub mod http;
