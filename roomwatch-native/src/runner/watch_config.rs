use roomwatch_core::constants::{KEEPALIVE_INTERVAL, RECONNECT_DELAY};
use roomwatch_core::{PageOrigin, RoomId, Timings};
use std::time::Duration;

/// Shortest keepalive period a runner accepts.
pub const MIN_KEEPALIVE_INTERVAL: Duration = Duration::from_millis(1);

/// Native-side input for a live reload runner
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Host and transport security of the server
    pub origin: PageOrigin,
    /// `None` disables the runner entirely
    pub room: Option<RoomId>,
    pub keepalive_interval: Duration,
    pub reconnect_delay: Duration,
}

impl WatchConfig {
    pub fn new(origin: PageOrigin, room: Option<RoomId>) -> Self {
        Self {
            origin,
            room,
            keepalive_interval: KEEPALIVE_INTERVAL,
            reconnect_delay: RECONNECT_DELAY,
        }
    }

    /// Periods below [`MIN_KEEPALIVE_INTERVAL`] are raised to it.
    pub fn with_keepalive_interval(mut self, every: Duration) -> Self {
        self.keepalive_interval = every.max(MIN_KEEPALIVE_INTERVAL);
        self
    }

    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn timings(&self) -> Timings {
        Timings {
            keepalive_interval: self.keepalive_interval.max(MIN_KEEPALIVE_INTERVAL),
            reconnect_delay: self.reconnect_delay,
        }
    }
}
