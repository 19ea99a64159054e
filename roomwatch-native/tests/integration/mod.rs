pub mod connection_tests;
pub mod message_tests;

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::Level;

use roomwatch_core::{PageOrigin, RoomId};
use roomwatch_native::{LiveReloadHandle, LiveReloadRunner, WatchConfig};

use crate::utils::{MockConnector, MockPeer, ReloadCounter};

pub const TEST_HOST: &str = "inbox.test:8000";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn test_config(room: Option<&str>) -> WatchConfig {
    WatchConfig::new(
        PageOrigin::new(false, TEST_HOST),
        RoomId::from_injected(room),
    )
}

pub struct TestRunner {
    pub handle: LiveReloadHandle,
    pub connector: MockConnector,
    pub peers: mpsc::UnboundedReceiver<MockPeer>,
    pub reloads: ReloadCounter,
}

impl TestRunner {
    pub async fn next_peer(&mut self) -> MockPeer {
        self.peers.recv().await.expect("connector dropped")
    }
}

pub fn spawn_runner(config: WatchConfig) -> TestRunner {
    let (connector, peers) = MockConnector::new();
    spawn_with(config, connector, peers)
}

pub fn spawn_with(
    config: WatchConfig,
    connector: MockConnector,
    peers: mpsc::UnboundedReceiver<MockPeer>,
) -> TestRunner {
    let reloads = ReloadCounter::new();
    let handle = LiveReloadRunner::new(config, connector.clone(), reloads.clone()).spawn();

    TestRunner {
        handle,
        connector,
        peers,
        reloads,
    }
}

/// Lets the runner drain whatever it was woken for.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}
