//! UseCase: ホスト認証
//!
//! ### どのような状況を想定しているか
//! - 正常系：正しいパスワードでのログイン、発行済みトークンでの認証、ログアウト
//! - 異常系：誤ったパスワード、未知または期限切れのトークン
//! - エッジケース：アクセスのたびに有効期限が延長される

use std::sync::Arc;

use mitsumori_shared::time::Clock;

use crate::domain::{HostGrant, HostPassword, HostSessionStore, HostToken, Timestamp};

use super::error::UseCaseError;

/// ホスト認証のユースケース
pub struct HostAuthUseCase {
    password: HostPassword,
    /// 発行済みトークンの保管庫
    grants: Arc<dyn HostSessionStore>,
    clock: Arc<dyn Clock>,
}

impl HostAuthUseCase {
    pub fn new(
        password: HostPassword,
        grants: Arc<dyn HostSessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            password,
            grants,
            clock,
        }
    }

    /// ログインしてトークンを発行
    ///
    /// # Returns
    ///
    /// * `Ok(HostToken)` - 発行したトークン
    /// * `Err(UseCaseError::Validation)` - パスワードが無い、または空
    /// * `Err(UseCaseError::Unauthorized)` - パスワードが一致しない
    pub async fn login(&self, password: Option<String>) -> Result<HostToken, UseCaseError> {
        let password = password
            .filter(|value| !value.is_empty())
            .ok_or_else(|| UseCaseError::Validation("Password required".to_string()))?;

        if !self.password.verify(&password) {
            tracing::warn!("host login rejected");
            return Err(UseCaseError::Unauthorized("Invalid password".to_string()));
        }

        let grant = HostGrant {
            token: HostToken::generate(),
            issued_at: Timestamp::new(self.clock.now_millis()),
        };
        let token = grant.token.clone();
        self.grants.issue(grant).await;

        tracing::info!("host logged in");
        Ok(token)
    }

    /// トークンを検証（成功すると有効期限が延長される）
    pub async fn authenticate(&self, token: Option<&str>) -> Result<HostGrant, UseCaseError> {
        let token = token
            .and_then(|value| HostToken::new(value).ok())
            .ok_or_else(|| {
                UseCaseError::Unauthorized("Host authentication required".to_string())
            })?;

        self.grants.touch(&token).await.ok_or_else(|| {
            tracing::warn!("rejected unknown or expired host token");
            UseCaseError::Unauthorized("Invalid or expired host session".to_string())
        })
    }

    /// ログアウト（未知のトークンでも成功）
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token.and_then(|value| HostToken::new(value).ok()) else {
            return;
        };
        if let Some(grant) = self.grants.revoke(&token).await {
            let held_ms = self.clock.now_millis() - grant.issued_at.value();
            tracing::info!("host logged out after {} ms", held_ms);
        }
    }

    /// 期限切れのトークンを削除し、削除数を返す
    pub async fn sweep_expired(&self) -> usize {
        let swept = self.grants.sweep_expired().await;
        if swept > 0 {
            tracing::info!("expired {} host sessions", swept);
        }
        swept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::host_session::InMemoryHostSessionStore;
    use mitsumori_shared::time::ManualClock;
    use std::time::Duration;

    fn create_usecase(clock: Arc<ManualClock>) -> HostAuthUseCase {
        let store = InMemoryHostSessionStore::new(Duration::from_millis(1_000), clock.clone());
        HostAuthUseCase::new(HostPassword::new("admin123"), Arc::new(store), clock)
    }

    #[tokio::test]
    async fn test_login_then_authenticate() {
        // テスト項目: 正しいパスワードで発行されたトークンは認証に通る
        // given (前提条件):
        let usecase = create_usecase(Arc::new(ManualClock::new(0)));

        // when (操作):
        let token = usecase.login(Some("admin123".to_string())).await.unwrap();
        let grant = usecase.authenticate(Some(token.as_str())).await;

        // then (期待する結果):
        assert_eq!(grant.map(|g| g.token), Ok(token));
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        // テスト項目: 誤ったパスワードは Unauthorized になる
        // given (前提条件):
        let usecase = create_usecase(Arc::new(ManualClock::new(0)));

        // when (操作):
        let result = usecase.login(Some("admin".to_string())).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(UseCaseError::Unauthorized("Invalid password".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_or_empty_password_is_validation_error() {
        // テスト項目: パスワード無し・空文字のログインは Validation エラーになる
        // given (前提条件):
        let usecase = create_usecase(Arc::new(ManualClock::new(0)));

        // when (操作) / then (期待する結果):
        let expected = Err(UseCaseError::Validation("Password required".to_string()));
        assert_eq!(usecase.login(None).await, expected);
        assert_eq!(usecase.login(Some(String::new())).await, expected);
    }

    #[tokio::test]
    async fn test_missing_or_unknown_token_is_unauthorized() {
        // テスト項目: トークン無し・未知のトークンはどちらも Unauthorized になる
        // given (前提条件):
        let usecase = create_usecase(Arc::new(ManualClock::new(0)));

        // when (操作) / then (期待する結果):
        assert!(matches!(
            usecase.authenticate(None).await,
            Err(UseCaseError::Unauthorized(_))
        ));
        assert!(matches!(
            usecase.authenticate(Some("host_forged")).await,
            Err(UseCaseError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_activity_slides_expiry_until_idle() {
        // テスト項目: 利用中は期限が延長され、放置するとタイムアウトで拒否される
        // given (前提条件):
        let clock = Arc::new(ManualClock::new(0));
        let usecase = create_usecase(clock.clone());
        let token = usecase.login(Some("admin123".to_string())).await.unwrap();

        // when (操作): タイムアウト未満の間隔で使い続ける
        for _ in 0..3 {
            clock.advance(800);
            assert!(usecase.authenticate(Some(token.as_str())).await.is_ok());
        }

        // then (期待する結果): タイムアウトを超えて放置すると拒否される
        clock.advance(1_001);
        assert!(matches!(
            usecase.authenticate(Some(token.as_str())).await,
            Err(UseCaseError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_logout_revokes_token_and_is_idempotent() {
        // テスト項目: ログアウト後のトークンは拒否され、二度目のログアウトも成功する
        // given (前提条件):
        let usecase = create_usecase(Arc::new(ManualClock::new(0)));
        let token = usecase.login(Some("admin123".to_string())).await.unwrap();

        // when (操作):
        usecase.logout(Some(token.as_str())).await;
        usecase.logout(Some(token.as_str())).await;
        usecase.logout(None).await;

        // then (期待する結果):
        assert!(usecase.authenticate(Some(token.as_str())).await.is_err());
    }

    #[tokio::test]
    async fn test_sweep_expired_counts_abandoned_tokens() {
        // テスト項目: 放置されたトークンが sweep で削除される
        // given (前提条件):
        let clock = Arc::new(ManualClock::new(0));
        let usecase = create_usecase(clock.clone());
        usecase.login(Some("admin123".to_string())).await.unwrap();

        // when (操作):
        clock.advance(2_000);
        let swept = usecase.sweep_expired().await;

        // then (期待する結果):
        assert_eq!(swept, 1);
    }
}
