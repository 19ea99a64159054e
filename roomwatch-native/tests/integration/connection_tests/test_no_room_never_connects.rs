use roomwatch_native::LiveReloadRunner;

use crate::integration::{init_tracing, settle, spawn_runner, test_config};
use crate::utils::{MockConnector, ReloadCounter};

#[tokio::test(start_paused = true)]
async fn test_no_room_never_connects() {
    init_tracing();

    for room in [None, Some("number:0"), Some("")] {
        let (connector, _peers) = MockConnector::new();
        LiveReloadRunner::new(test_config(room), connector.clone(), ReloadCounter::new())
            .run()
            .await;

        assert!(
            connector.attempts().is_empty(),
            "room {:?} should not connect",
            room
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_spawned_runner_without_room_finishes() {
    init_tracing();

    let runner = spawn_runner(test_config(Some("number:0")));
    settle().await;

    assert!(runner.handle.is_finished());
    assert!(runner.connector.attempts().is_empty());
}
