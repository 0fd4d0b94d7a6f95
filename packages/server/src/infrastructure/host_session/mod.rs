//! ホストトークン保管庫の実装
//!
//! - `expiring_cache`: スライディング TTL 付きの汎用キャッシュ
//! - `inmemory`: `HostSessionStore` trait のインメモリ実装

pub mod expiring_cache;
pub mod inmemory;

pub use expiring_cache::ExpiringCache;
pub use inmemory::InMemoryHostSessionStore;
