use std::time::Duration;

use crate::integration::{init_tracing, spawn_with, test_config};
use crate::utils::MockConnector;

#[tokio::test(start_paused = true)]
async fn test_connect_failure_retries() {
    init_tracing();

    let (connector, peers) = MockConnector::new();
    connector.refuse_next(2);

    let mut runner = spawn_with(test_config(Some("r1")), connector, peers);
    let _peer = runner.next_peer().await;

    let attempts = runner.connector.attempts();
    assert_eq!(attempts.len(), 3);
    assert!(attempts.iter().all(|a| a.url == attempts[0].url));
    for pair in attempts.windows(2) {
        assert!(pair[1].at - pair[0].at >= Duration::from_millis(1_500));
    }

    runner.handle.shutdown().await;
}
