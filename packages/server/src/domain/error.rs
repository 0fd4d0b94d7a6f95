//! ドメイン層のエラー型

use thiserror::Error;

use super::value_object::SessionStatus;

/// Value Object 生成時のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("participant id must not be empty")]
    ParticipantIdEmpty,

    #[error("participant id must be at most {0} characters")]
    ParticipantIdTooLong(usize),

    #[error("participant id '{0}' contains characters other than [A-Za-z0-9_-]")]
    ParticipantIdInvalidChars(String),

    #[error("nickname must not be empty")]
    NicknameEmpty,

    #[error("vote '{0}' is not in the deck")]
    VoteOutOfDeck(String),

    #[error("host token must not be empty")]
    HostTokenEmpty,
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// 対象の参加者が存在しない
    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),

    /// 参加者数が上限に達している
    #[error("maximum {0} participants allowed per session")]
    CapacityExceeded(usize),

    /// 永続化に失敗した
    #[error("persistence failed: {0}")]
    Persistence(String),
}

/// 状態遷移が拒否された
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("transition from '{from}' to '{to}' is not allowed")]
    Rejected {
        from: SessionStatus,
        to: SessionStatus,
    },
}
