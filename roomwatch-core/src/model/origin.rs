use crate::constants::{ENDPOINT_PATH, ROOM_QUERY_PARAM};
use crate::error::OriginError;
use crate::model::RoomId;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Transport security and host of the page the client runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin {
    pub secure: bool,
    pub host: String,
}

impl PageOrigin {
    pub fn new(secure: bool, host: impl Into<String>) -> Self {
        Self {
            secure,
            host: host.into(),
        }
    }

    /// Builds the origin from `location.protocol` and `location.host`.
    pub fn from_location(protocol: &str, host: &str) -> Self {
        Self::new(protocol == "https:", host)
    }

    /// Parses a base URL such as `https://example.com:8080/inbox`.
    ///
    /// Only the scheme and host are kept. Credentials in the authority are dropped.
    pub fn parse(base: &str) -> Result<Self, OriginError> {
        let trimmed = base.trim();
        let (scheme, rest) = trimmed
            .split_once("://")
            .ok_or_else(|| OriginError::MissingScheme(trimmed.to_string()))?;

        let secure = match scheme.to_ascii_lowercase().as_str() {
            "http" | "ws" => false,
            "https" | "wss" => true,
            other => return Err(OriginError::UnsupportedScheme(other.to_string())),
        };

        let authority = rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        if host.is_empty() {
            return Err(OriginError::MissingHost(trimmed.to_string()));
        }

        Ok(Self::new(secure, host))
    }

    pub fn scheme(&self) -> &'static str {
        if self.secure { "wss" } else { "ws" }
    }

    /// WebSocket endpoint subscribing to `room`.
    pub fn endpoint(&self, room: &RoomId) -> String {
        format!(
            "{}://{}{}?{}={}",
            self.scheme(),
            self.host,
            ENDPOINT_PATH,
            ROOM_QUERY_PARAM,
            utf8_percent_encode(room.as_str(), URI_COMPONENT)
        )
    }
}
