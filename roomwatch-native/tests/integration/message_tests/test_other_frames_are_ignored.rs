use crate::integration::{init_tracing, settle, spawn_runner, test_config};

#[tokio::test(start_paused = true)]
async fn test_other_frames_are_ignored() {
    init_tracing();

    let mut runner = spawn_runner(test_config(Some("r1")));
    let peer = runner.next_peer().await;

    for frame in [
        r#"{"event":"other"}"#,
        r#"{"event":"message:read"}"#,
        "not json",
        "pong",
        "[1,2]",
        r#"{"data":{"event":"message:new"}}"#,
    ] {
        peer.push_text(frame);
    }
    settle().await;

    assert_eq!(runner.reloads.count(), 0);
    assert_eq!(
        runner.connector.attempts().len(),
        1,
        "ignored frames must not close the connection"
    );

    runner.handle.shutdown().await;
}
