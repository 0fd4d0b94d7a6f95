//! Infrastructure 層
//!
//! ドメイン層が定義する trait の具体的な実装と、外部との入出力の形式（DTO）を提供します。

pub mod dto;
pub mod host_session;
pub mod repository;
