//! バックグラウンドタスク
//!
//! - `CleanupParticipants`: 保持期間を過ぎた参加者の定期掃除
//! - `SweepHostSessions`: 期限切れホストトークンの定期削除
//!
//! どちらもリクエスト処理とは独立した `tokio` タスクとして動き、
//! 失敗してもログを出してループを続けます。

mod background;
pub mod cleanup_participants;
pub mod sweep_host_sessions;

pub use self::{
    background::Background, cleanup_participants::CleanupParticipants,
    sweep_host_sessions::SweepHostSessions,
};
