use crate::transport::TransportError;
use async_trait::async_trait;

/// One established text-frame connection.
#[async_trait]
pub trait Transport: Send {
    async fn send(&mut self, text: String) -> Result<(), TransportError>;

    /// Next text frame. `None` once the connection has ended cleanly.
    async fn recv(&mut self) -> Option<Result<String, TransportError>>;

    async fn close(&mut self) -> Result<(), TransportError>;
}

/// Opens connections for the runner. Each reconnect calls `connect` again.
#[async_trait]
pub trait Connector: Send + Sync {
    type Transport: Transport + 'static;

    async fn connect(&self, url: &str) -> Result<Self::Transport, TransportError>;
}
