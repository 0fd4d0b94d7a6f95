//! UseCase 層のエラー型
//!
//! UI 層はこの分類だけを見て HTTP ステータスを決めます。

use thiserror::Error;

use crate::domain::{RepositoryError, TransitionError, ValueObjectError};

/// ユースケースの失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    /// 入力が不正（必須項目の欠落、デッキ外の投票など）
    #[error("{0}")]
    Validation(String),

    /// 対象が存在しない
    #[error("{0}")]
    NotFound(String),

    /// ホスト認証が必要、またはトークンが無効
    #[error("{0}")]
    Unauthorized(String),

    /// 参加者数の上限に達している
    #[error("{0}")]
    CapacityExceeded(String),

    /// 永続化に失敗した
    #[error("{0}")]
    Persistence(String),
}

impl From<ValueObjectError> for UseCaseError {
    fn from(error: ValueObjectError) -> Self {
        Self::Validation(error.to_string())
    }
}

impl From<RepositoryError> for UseCaseError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::ParticipantNotFound(_) => Self::NotFound(error.to_string()),
            RepositoryError::CapacityExceeded(_) => Self::CapacityExceeded(error.to_string()),
            RepositoryError::Persistence(_) => Self::Persistence(error.to_string()),
        }
    }
}

impl From<TransitionError> for UseCaseError {
    fn from(error: TransitionError) -> Self {
        Self::Validation(error.to_string())
    }
}
