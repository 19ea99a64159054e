use std::time::Duration;

/// Injected room value meaning "live reload disabled".
pub const NO_ROOM_SENTINEL: &str = "number:0";

/// Name of the page global carrying the room identifier.
pub const ROOM_GLOBAL: &str = "__ROOM__";

pub const ENDPOINT_PATH: &str = "/api/ws";
pub const ROOM_QUERY_PARAM: &str = "room";

pub const KEEPALIVE_FRAME: &str = "ping";
pub const NEW_MESSAGE_EVENT: &str = "message:new";

pub const KEEPALIVE_INTERVAL: Duration = Duration::from_millis(25_000);
pub const RECONNECT_DELAY: Duration = Duration::from_millis(1_500);
