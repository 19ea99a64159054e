use crate::machine::ConnectionId;
use std::time::Duration;

/// Side effects requested from a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new connection. It replaces any previous one.
    Connect { id: ConnectionId, url: String },

    /// Start a recurring timer whose first tick is one period from now.
    StartKeepalive { id: ConnectionId, every: Duration },

    StopKeepalive { id: ConnectionId },

    /// Fire-and-forget text frame. Send failures are discarded.
    Send { id: ConnectionId, text: String },

    /// Full page reload.
    Reload,

    /// Deliver [`Input::RetryElapsed`](crate::machine::Input::RetryElapsed) once, after the delay.
    ScheduleRetry { after: Duration },
}
