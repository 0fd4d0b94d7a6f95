//! InMemory HostSessionStore 実装
//!
//! ドメイン層が定義する `HostSessionStore` trait を `ExpiringCache` の上に実装します。
//! トークンはプロセスのメモリにのみ存在し、再起動すると全て失効します。

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use mitsumori_shared::time::Clock;

use crate::domain::{HostGrant, HostSessionStore, HostToken};

use super::ExpiringCache;

/// インメモリ HostSessionStore 実装
pub struct InMemoryHostSessionStore {
    grants: ExpiringCache<HostToken, HostGrant>,
}

impl InMemoryHostSessionStore {
    /// `timeout` 以上アクセスの無いトークンを失効させる保管庫を作成
    pub fn new(timeout: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            grants: ExpiringCache::new(timeout, clock),
        }
    }
}

#[async_trait]
impl HostSessionStore for InMemoryHostSessionStore {
    async fn issue(&self, grant: HostGrant) {
        self.grants.insert(grant.token.clone(), grant).await;
    }

    async fn touch(&self, token: &HostToken) -> Option<HostGrant> {
        self.grants.get(token).await
    }

    async fn revoke(&self, token: &HostToken) -> Option<HostGrant> {
        self.grants.remove(token).await
    }

    async fn sweep_expired(&self) -> usize {
        self.grants.evict_expired().await
    }
}
