use roomwatch_core::{PageOrigin, RoomId};
use roomwatch_native::WatchConfig;

use crate::integration::{TEST_HOST, init_tracing, spawn_runner, test_config};

#[tokio::test(start_paused = true)]
async fn test_connects_to_room_endpoint() {
    init_tracing();

    let mut runner = spawn_runner(test_config(Some("number:12")));
    let peer = runner.next_peer().await;

    assert_eq!(
        peer.url,
        format!("ws://{}/api/ws?room=number%3A12", TEST_HOST)
    );
    assert_eq!(runner.connector.attempts().len(), 1);

    runner.handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_secure_origin_uses_wss() {
    init_tracing();

    let config = WatchConfig::new(
        PageOrigin::parse("https://inbox.example.com/conversations").unwrap(),
        RoomId::from_injected(Some("sales team")),
    );
    let mut runner = spawn_runner(config);
    let peer = runner.next_peer().await;

    assert_eq!(
        peer.url,
        "wss://inbox.example.com/api/ws?room=sales%20team"
    );

    runner.handle.shutdown().await;
}
