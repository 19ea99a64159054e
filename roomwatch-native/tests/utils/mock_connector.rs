use async_trait::async_trait;
use roomwatch_native::{Connector, Transport, TransportError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::time::Instant;

enum MockFrame {
    Text(String),
    Error,
}

/// Server side of one accepted mock connection.
pub struct MockPeer {
    pub url: String,
    frames: Option<mpsc::UnboundedSender<MockFrame>>,
    sent: Arc<Mutex<Vec<String>>>,
    closed_by_client: Arc<AtomicBool>,
    fail_sends: Arc<AtomicBool>,
}

impl MockPeer {
    /// Deliver a text frame to the client.
    pub fn push_text(&self, text: &str) {
        if let Some(frames) = &self.frames {
            let _ = frames.send(MockFrame::Text(text.to_string()));
        }
    }

    /// Make the client's next receive fail.
    pub fn push_error(&self) {
        if let Some(frames) = &self.frames {
            let _ = frames.send(MockFrame::Error);
        }
    }

    /// End the connection from the server side.
    pub fn disconnect(&mut self) {
        self.frames = None;
    }

    /// Every later send by the client fails.
    pub fn fail_sends(&self) {
        self.fail_sends.store(true, Ordering::SeqCst);
    }

    /// Frames the client sent successfully.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn was_closed_by_client(&self) -> bool {
        self.closed_by_client.load(Ordering::SeqCst)
    }
}

pub struct MockTransport {
    frames: mpsc::UnboundedReceiver<MockFrame>,
    sent: Arc<Mutex<Vec<String>>>,
    closed_by_client: Arc<AtomicBool>,
    fail_sends: Arc<AtomicBool>,
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, text: String) -> Result<(), TransportError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TransportError::Other("scripted send failure".into()));
        }
        self.sent.lock().unwrap().push(text);
        Ok(())
    }

    async fn recv(&mut self) -> Option<Result<String, TransportError>> {
        match self.frames.recv().await {
            Some(MockFrame::Text(text)) => Some(Ok(text)),
            Some(MockFrame::Error) => {
                Some(Err(TransportError::Other("scripted receive failure".into())))
            }
            None => None,
        }
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.closed_by_client.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ConnectAttempt {
    pub url: String,
    pub at: Instant,
}

struct ConnectorInner {
    attempts: Mutex<Vec<ConnectAttempt>>,
    refuse_remaining: AtomicUsize,
    peers_tx: mpsc::UnboundedSender<MockPeer>,
}

/// Connector recording every attempt. Accepted connections are handed to the
/// test as [`MockPeer`]s on the returned receiver.
#[derive(Clone)]
pub struct MockConnector {
    inner: Arc<ConnectorInner>,
}

impl MockConnector {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<MockPeer>) {
        let (peers_tx, peers_rx) = mpsc::unbounded_channel();
        let connector = Self {
            inner: Arc::new(ConnectorInner {
                attempts: Mutex::new(Vec::new()),
                refuse_remaining: AtomicUsize::new(0),
                peers_tx,
            }),
        };
        (connector, peers_rx)
    }

    /// Refuse the next `count` connection attempts.
    pub fn refuse_next(&self, count: usize) {
        self.inner.refuse_remaining.store(count, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> Vec<ConnectAttempt> {
        self.inner.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for MockConnector {
    type Transport = MockTransport;

    async fn connect(&self, url: &str) -> Result<MockTransport, TransportError> {
        tracing::debug!("[MockConnector] connect {}", url);
        self.inner.attempts.lock().unwrap().push(ConnectAttempt {
            url: url.to_string(),
            at: Instant::now(),
        });

        let refused = self
            .inner
            .refuse_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if refused {
            return Err(TransportError::Other("connection refused".into()));
        }

        let (frames_tx, frames_rx) = mpsc::unbounded_channel();
        let sent = Arc::new(Mutex::new(Vec::new()));
        let closed_by_client = Arc::new(AtomicBool::new(false));
        let fail_sends = Arc::new(AtomicBool::new(false));

        let peer = MockPeer {
            url: url.to_string(),
            frames: Some(frames_tx),
            sent: Arc::clone(&sent),
            closed_by_client: Arc::clone(&closed_by_client),
            fail_sends: Arc::clone(&fail_sends),
        };
        let _ = self.inner.peers_tx.send(peer);

        Ok(MockTransport {
            frames: frames_rx,
            sent,
            closed_by_client,
            fail_sends,
        })
    }
}
