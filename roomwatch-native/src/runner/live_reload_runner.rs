use crate::reload::Reload;
use crate::runner::{LiveReloadHandle, MIN_KEEPALIVE_INTERVAL, WatchConfig};
use crate::transport::{Connector, Transport, TransportError};
use roomwatch_core::{
    Command, ConnectionId, ConnectionSlot, ConnectionState, Input, ReloadMachine,
};
use std::collections::VecDeque;
use std::future::{Future, pending};
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{Instant, Interval, MissedTickBehavior, Sleep};
use tracing::{debug, info, warn};

enum Wake {
    Shutdown,
    Transport(ConnectionId, Option<Result<String, TransportError>>),
    Keepalive(ConnectionId),
    RetryElapsed,
}

/// Drives a [`ReloadMachine`] on tokio: one connection, the keepalive
/// interval and the reconnect timer, multiplexed in a single task.
pub struct LiveReloadRunner<C: Connector, R: Reload> {
    machine: ReloadMachine,
    connector: C,
    reload: R,
    transport: ConnectionSlot<C::Transport>,
    keepalive: ConnectionSlot<Interval>,
    retry: Option<Pin<Box<Sleep>>>,
}

impl<C, R> LiveReloadRunner<C, R>
where
    C: Connector + 'static,
    R: Reload + 'static,
{
    pub fn new(config: WatchConfig, connector: C, reload: R) -> Self {
        let timings = config.timings();
        let machine = ReloadMachine::new(config.origin, config.room).with_timings(timings);

        Self {
            machine,
            connector,
            reload,
            transport: ConnectionSlot::new(),
            keepalive: ConnectionSlot::new(),
            retry: None,
        }
    }

    pub fn spawn(self) -> LiveReloadHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(self.run_until(async move {
            let _ = shutdown_rx.await;
        }));
        LiveReloadHandle::new(shutdown_tx, task)
    }

    /// Runs until the process ends. Returns at once when no room is configured.
    pub async fn run(self) {
        self.run_until(pending::<()>()).await
    }

    pub async fn run_until<S>(mut self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        self.feed(Input::Start).await;
        if self.machine.state() == ConnectionState::Disabled {
            info!("No room configured, live reload disabled");
            return;
        }

        loop {
            let wake = tokio::select! {
                _ = &mut shutdown => Wake::Shutdown,
                (id, frame) = next_frame(&mut self.transport) => Wake::Transport(id, frame),
                id = next_tick(&mut self.keepalive) => Wake::Keepalive(id),
                _ = retry_elapsed(&mut self.retry) => Wake::RetryElapsed,
            };

            match wake {
                Wake::Shutdown => break,
                Wake::Transport(id, Some(Ok(text))) => self.feed(Input::Frame(id, text)).await,
                Wake::Transport(id, Some(Err(e))) => {
                    warn!("Connection {} failed: {}", id, e);
                    self.feed(Input::Closed(id)).await;
                }
                Wake::Transport(id, None) => {
                    info!("Connection {} closed", id);
                    self.feed(Input::Closed(id)).await;
                }
                Wake::Keepalive(id) => self.feed(Input::KeepaliveTick(id)).await,
                Wake::RetryElapsed => {
                    self.retry = None;
                    self.feed(Input::RetryElapsed).await;
                }
            }
        }

        if let Some((id, mut transport)) = self.transport.take() {
            if let Err(e) = transport.close().await {
                debug!("Closing connection {} on shutdown: {}", id, e);
            }
        }
        info!("Live reload runner stopped");
    }

    async fn feed(&mut self, input: Input) {
        let mut pending = VecDeque::from([input]);

        while let Some(input) = pending.pop_front() {
            for command in self.machine.handle(input) {
                if let Some(next) = self.perform(command).await {
                    pending.push_back(next);
                }
            }
        }
    }

    async fn perform(&mut self, command: Command) -> Option<Input> {
        match command {
            Command::Connect { id, url } => {
                self.transport.take();
                info!("Connecting {} to {}", id, url);
                match self.connector.connect(&url).await {
                    Ok(transport) => {
                        self.transport.replace(id, transport);
                        Some(Input::Opened(id))
                    }
                    Err(e) => {
                        warn!("Connection {} failed: {}", id, e);
                        Some(Input::Closed(id))
                    }
                }
            }

            Command::StartKeepalive { id, every } => {
                self.keepalive.replace(id, keepalive_interval(every));
                None
            }

            Command::StopKeepalive { id } => {
                self.keepalive.take_for(id);
                None
            }

            Command::Send { id, text } => {
                if let Some(transport) = self.transport.get_mut(id) {
                    if let Err(e) = transport.send(text).await {
                        debug!("Keepalive on {} dropped: {}", id, e);
                    }
                }
                None
            }

            Command::Reload => {
                info!("New message received, reloading");
                self.reload.reload();
                None
            }

            Command::ScheduleRetry { after } => {
                self.transport.take();
                debug!("Reconnecting in {:?}", after);
                self.retry = Some(Box::pin(tokio::time::sleep(after)));
                None
            }
        }
    }
}

/// A zero period would make tokio panic, so it is raised to the minimum.
fn keepalive_interval(every: Duration) -> Interval {
    let every = every.max(MIN_KEEPALIVE_INTERVAL);
    let mut interval = tokio::time::interval_at(Instant::now() + every, every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn next_frame<T: Transport>(
    slot: &mut ConnectionSlot<T>,
) -> (ConnectionId, Option<Result<String, TransportError>>) {
    match slot.current_mut() {
        Some((id, transport)) => (id, transport.recv().await),
        None => pending().await,
    }
}

async fn next_tick(slot: &mut ConnectionSlot<Interval>) -> ConnectionId {
    match slot.current_mut() {
        Some((id, interval)) => {
            interval.tick().await;
            id
        }
        None => pending().await,
    }
}

async fn retry_elapsed(slot: &mut Option<Pin<Box<Sleep>>>) {
    match slot {
        Some(sleep) => sleep.as_mut().await,
        None => pending().await,
    }
}
