//! セッション状態機械
//!
//! 遷移表は「遷移先」だけをキーにしており、遷移元によるガードはありません
//! （ホストの意図が常に優先される）。遷移の入口は [`SessionStateMachine::plan`] ただ一つで、
//! ガードが必要になった場合は [`TransitionPolicy`] を差し替えます。

use super::{error::TransitionError, value_object::SessionStatus};

/// 遷移に伴う副作用の計画
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPlan {
    /// 遷移先
    pub target: SessionStatus,
    /// 全参加者の投票をクリアする
    pub clear_votes: bool,
    /// 保持期間を過ぎた参加者を掃除する
    pub cleanup_stale: bool,
}

impl TransitionPlan {
    /// 遷移先から副作用を引く遷移表
    pub fn for_target(target: SessionStatus) -> Self {
        match target {
            // start: 新しいラウンドのため投票をリセット
            SessionStatus::Voting => Self {
                target,
                clear_votes: true,
                cleanup_stale: false,
            },
            // end: 集計のため投票は凍結
            SessionStatus::Ended => Self {
                target,
                clear_votes: false,
                cleanup_stale: false,
            },
            // reset: 投票クリアに加えて古い参加者も掃除
            SessionStatus::Waiting => Self {
                target,
                clear_votes: true,
                cleanup_stale: true,
            },
        }
    }
}

/// 遷移の可否を判断するポリシー
pub trait TransitionPolicy: Send + Sync {
    fn allows(&self, from: SessionStatus, to: SessionStatus) -> bool;
}

/// すべての遷移を許可するポリシー（既定）
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissivePolicy;

impl TransitionPolicy for PermissivePolicy {
    fn allows(&self, _from: SessionStatus, _to: SessionStatus) -> bool {
        true
    }
}

/// セッション状態機械
pub struct SessionStateMachine {
    policy: Box<dyn TransitionPolicy>,
}

impl SessionStateMachine {
    pub fn new(policy: Box<dyn TransitionPolicy>) -> Self {
        Self { policy }
    }

    /// 現在の状態から `target` への遷移計画を返す
    ///
    /// # Errors
    ///
    /// ポリシーが遷移を拒否した場合 `TransitionError::Rejected`
    pub fn plan(
        &self,
        current: SessionStatus,
        target: SessionStatus,
    ) -> Result<TransitionPlan, TransitionError> {
        if !self.policy.allows(current, target) {
            return Err(TransitionError::Rejected {
                from: current,
                to: target,
            });
        }
        Ok(TransitionPlan::for_target(target))
    }
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new(Box::new(PermissivePolicy))
    }
}
