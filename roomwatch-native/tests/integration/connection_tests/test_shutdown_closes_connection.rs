use crate::integration::{init_tracing, spawn_runner, test_config};

#[tokio::test(start_paused = true)]
async fn test_shutdown_closes_connection() {
    init_tracing();

    let mut runner = spawn_runner(test_config(Some("r1")));
    let peer = runner.next_peer().await;
    assert!(!peer.was_closed_by_client());

    runner.handle.shutdown().await;

    assert!(peer.was_closed_by_client());
}
