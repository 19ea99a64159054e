//! Connection lifecycle of the live-reload client as a sans-IO state machine.
//!
//! Drivers feed transport and timer events as [`Input`]s and execute the
//! returned [`Command`]s. The machine itself never touches a socket or clock.

mod command;
mod input;
mod slot;

pub use command::Command;
pub use input::Input;
pub use slot::ConnectionSlot;

use crate::constants::{KEEPALIVE_FRAME, KEEPALIVE_INTERVAL, RECONNECT_DELAY};
use crate::model::{InboundEvent, PageOrigin, RoomId};
use std::fmt;
use std::time::Duration;

/// Identifies one connection instance. Inputs carrying an older id are stale.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ConnectionId(u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not started yet.
    Idle,
    /// Started without a room. Terminal.
    Disabled,
    Connecting,
    Open,
    ClosedPendingRetry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub keepalive_interval: Duration,
    pub reconnect_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            keepalive_interval: KEEPALIVE_INTERVAL,
            reconnect_delay: RECONNECT_DELAY,
        }
    }
}

#[derive(Debug, Clone)]
struct Target {
    origin: PageOrigin,
    room: RoomId,
}

#[derive(Debug, Clone)]
pub struct ReloadMachine {
    target: Option<Target>,
    timings: Timings,
    state: ConnectionState,
    current: Option<ConnectionId>,
    next_id: u64,
}

impl ReloadMachine {
    /// The room is validated once, here. Retries reuse it as is.
    pub fn new(origin: PageOrigin, room: Option<RoomId>) -> Self {
        Self {
            target: room.map(|room| Target { origin, room }),
            timings: Timings::default(),
            state: ConnectionState::Idle,
            current: None,
            next_id: 0,
        }
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn current(&self) -> Option<ConnectionId> {
        self.current
    }

    pub fn room(&self) -> Option<&RoomId> {
        self.target.as_ref().map(|t| &t.room)
    }

    pub fn handle(&mut self, input: Input) -> Vec<Command> {
        use ConnectionState::*;

        match (self.state, input) {
            (Idle, Input::Start) if self.target.is_some() => self.connect(),
            (Idle, Input::Start) => {
                self.state = Disabled;
                Vec::new()
            }

            (Connecting, Input::Opened(id)) if self.is_current(id) => {
                self.state = Open;
                vec![Command::StartKeepalive {
                    id,
                    every: self.timings.keepalive_interval,
                }]
            }

            (Open, Input::KeepaliveTick(id)) if self.is_current(id) => vec![Command::Send {
                id,
                text: KEEPALIVE_FRAME.to_string(),
            }],

            (Open, Input::Frame(id, text)) if self.is_current(id) => {
                match InboundEvent::decode(&text) {
                    Ok(event) if event.is_new_message() => vec![Command::Reload],
                    _ => Vec::new(),
                }
            }

            (was @ (Connecting | Open), Input::Closed(id)) if self.is_current(id) => {
                self.state = ClosedPendingRetry;
                let mut commands = Vec::with_capacity(2);
                if was == Open {
                    commands.push(Command::StopKeepalive { id });
                }
                commands.push(Command::ScheduleRetry {
                    after: self.timings.reconnect_delay,
                });
                commands
            }

            (ClosedPendingRetry, Input::RetryElapsed) => self.connect(),

            _ => Vec::new(),
        }
    }

    fn is_current(&self, id: ConnectionId) -> bool {
        self.current == Some(id)
    }

    fn connect(&mut self) -> Vec<Command> {
        let Some(target) = &self.target else {
            return Vec::new();
        };
        let url = target.origin.endpoint(&target.room);

        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        self.current = Some(id);
        self.state = ConnectionState::Connecting;

        vec![Command::Connect { id, url }]
    }
}
