//! JSON スナップショットファイル
//!
//! ストア全体を一つの JSON ファイルとして保存します。
//! 書き込みは `<path>.tmp` に書いてから rename するため、途中でプロセスが落ちても
//! 直前のスナップショットが壊れることはありません。

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::domain::RepositoryError;

/// スナップショットファイル
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// スナップショットを読み込む（ファイルが無ければ None）
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, RepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RepositoryError::Persistence(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            RepositoryError::Persistence(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))
        })
    }

    /// スナップショットを書き込む
    pub async fn save<T: Serialize>(&self, state: &T) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| RepositoryError::Persistence(format!("failed to encode state: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await.map_err(|e| {
            RepositoryError::Persistence(format!("failed to write {}: {e}", tmp.display()))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            RepositoryError::Persistence(format!(
                "failed to replace {}: {e}",
                self.path.display()
            ))
        })?;

        Ok(())
    }
}
