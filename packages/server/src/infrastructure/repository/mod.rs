//! Repository 実装
//!
//! - `inmemory`: セッションと名簿のインメモリストア
//! - `snapshot`: ストアの JSON スナップショット

pub mod inmemory;
pub mod snapshot;

pub use inmemory::{InMemoryStore, StoreState};
pub use snapshot::SnapshotFile;
