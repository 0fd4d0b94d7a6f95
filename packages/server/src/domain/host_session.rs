//! ホスト認証のドメイン定義
//!
//! - `HostPassword`: 設定されたホスト用パスワード（比較は定数時間）
//! - `HostGrant`: 認証済みのホストを表す
//! - `HostSessionStore`: 発行済みトークンの保管庫（スライディング有効期限）

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use super::value_object::{HostToken, Timestamp};

/// ホスト用パスワード
pub struct HostPassword(SecretString);

impl HostPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self(SecretString::from(password.into()))
    }

    /// 候補のパスワードが一致するか
    ///
    /// 両辺を SHA-256 でハッシュしてから全バイトを XOR で畳み込むため、
    /// 比較時間は入力の長さや一致している接頭辞の長さに依存しない。
    pub fn verify(&self, candidate: &str) -> bool {
        let expected = Sha256::digest(self.0.expose_secret().as_bytes());
        let actual = Sha256::digest(candidate.as_bytes());

        expected
            .iter()
            .zip(actual.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for HostPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HostPassword([REDACTED])")
    }
}

/// 認証済みホスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGrant {
    pub token: HostToken,
    pub issued_at: Timestamp,
}

/// ホストトークンの保管庫
///
/// トークンはプロセスのメモリにのみ保持し、永続化しません。
/// 有効期限はスライディング方式で、`touch` に成功するたびに延長されます。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostSessionStore: Send + Sync {
    /// トークンを登録
    async fn issue(&self, grant: HostGrant);

    /// トークンを検証し、有効なら最終アクセス時刻を更新して返す
    ///
    /// 期限切れのトークンはこの時点で削除される
    async fn touch(&self, token: &HostToken) -> Option<HostGrant>;

    /// トークンを削除（存在しなくてもよい）。削除した場合は発行時の情報を返す
    async fn revoke(&self, token: &HostToken) -> Option<HostGrant>;

    /// 期限切れのトークンを一括削除し、削除数を返す
    async fn sweep_expired(&self) -> usize;
}
