//! Background environment for running periodic tasks.

use std::future::Future;

use tokio::task::JoinHandle;

/// Set of spawned background tasks.
///
/// Tasks run until [`Background::shutdown`] aborts them.
#[derive(Debug, Default)]
pub struct Background {
    handles: Vec<JoinHandle<()>>,
}

impl Background {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a new task onto the runtime.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.push(tokio::spawn(future));
    }

    /// Aborts every task and waits for them to finish.
    pub async fn shutdown(self) {
        for handle in &self.handles {
            handle.abort();
        }
        for handle in self.handles {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::error!("background task failed: {}", e);
                }
            }
        }
    }
}
