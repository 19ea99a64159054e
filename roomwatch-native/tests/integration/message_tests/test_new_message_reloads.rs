use crate::integration::{init_tracing, settle, spawn_runner, test_config};

#[tokio::test(start_paused = true)]
async fn test_new_message_reloads_once() {
    init_tracing();

    let mut runner = spawn_runner(test_config(Some("r1")));
    let peer = runner.next_peer().await;

    peer.push_text(r#"{"event":"message:new","conversation_id":42}"#);
    settle().await;

    assert_eq!(runner.reloads.count(), 1);
    assert_eq!(runner.connector.attempts().len(), 1);

    runner.handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_each_new_message_reloads() {
    init_tracing();

    let mut runner = spawn_runner(test_config(Some("r1")));
    let peer = runner.next_peer().await;

    peer.push_text(r#"{"event":"message:new"}"#);
    peer.push_text(r#"{"event":"message:new"}"#);
    settle().await;

    assert_eq!(runner.reloads.count(), 2);

    runner.handle.shutdown().await;
}
