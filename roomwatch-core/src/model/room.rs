use crate::constants::NO_ROOM_SENTINEL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque subscription key for reload notifications.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct RoomId(String);

impl RoomId {
    /// Validates a value injected by the hosting page.
    ///
    /// Absence, the empty string and [`NO_ROOM_SENTINEL`] all mean the
    /// feature is disabled.
    pub fn from_injected(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") | Some(NO_ROOM_SENTINEL) => None,
            Some(room) => Some(Self(room.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A `window.__ROOM__` value as the page script sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum InjectedValue {
    /// `undefined` or `null`
    Nullish,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Any other value, carried as its JS string form
    Other(String),
}

impl InjectedValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nullish => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Other(_) => true,
        }
    }

    /// The room text a page script would interpolate, or `None` for a falsy value.
    pub fn into_room_text(self) -> Option<String> {
        if !self.is_truthy() {
            return None;
        }
        match self {
            Self::Nullish => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(js_number_string(n)),
            Self::Text(s) | Self::Other(s) => Some(s),
        }
    }
}

/// `Number.prototype.toString` for finite and infinite values.
fn js_number_string(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // shortest digits, exponent always signed
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{n}")
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
