use std::time::Duration;

use crate::integration::{init_tracing, settle, spawn_runner, test_config};

#[tokio::test(start_paused = true)]
async fn test_send_failure_is_ignored() {
    init_tracing();

    let mut runner = spawn_runner(test_config(Some("r1")));
    let peer = runner.next_peer().await;
    peer.fail_sends();

    tokio::time::sleep(Duration::from_millis(50_001)).await;
    assert!(peer.sent().is_empty());
    assert_eq!(
        runner.connector.attempts().len(),
        1,
        "failed keepalives must not drop the connection"
    );

    peer.push_text(r#"{"event":"message:new"}"#);
    settle().await;
    assert_eq!(runner.reloads.count(), 1);

    runner.handle.shutdown().await;
}
