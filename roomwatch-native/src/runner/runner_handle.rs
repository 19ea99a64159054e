use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::error;

/// Handle of a spawned runner. Dropping it also stops the runner.
pub struct LiveReloadHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl LiveReloadHandle {
    pub(crate) fn new(shutdown_tx: oneshot::Sender<()>, task: JoinHandle<()>) -> Self {
        Self {
            shutdown_tx: Some(shutdown_tx),
            task,
        }
    }

    /// True once the runner has returned, e.g. because no room was configured.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the runner and waits for it to close its connection.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            if e.is_panic() {
                error!("Live reload runner panicked: {}", e);
            }
        }
    }
}
