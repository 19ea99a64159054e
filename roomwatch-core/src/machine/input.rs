use crate::machine::ConnectionId;

/// Events fed into the reload machine by a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Page script started.
    Start,

    /// The connection identified by the id finished its handshake.
    Opened(ConnectionId),

    /// Text frame received on a connection.
    Frame(ConnectionId, String),

    /// Keepalive timer fired for a connection.
    KeepaliveTick(ConnectionId),

    /// Connection closed or failed. Errors and clean closes are not told apart.
    Closed(ConnectionId),

    /// Reconnect delay elapsed.
    RetryElapsed,
}
