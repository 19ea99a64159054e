use super::ConnectionId;

/// A resource owned by one connection instance, such as its socket or its
/// keepalive timer.
///
/// Lookups by id only succeed for the instance currently held, so a callback
/// belonging to a replaced connection cannot reach its successor.
#[derive(Debug)]
pub struct ConnectionSlot<T> {
    held: Option<(ConnectionId, T)>,
}

impl<T> Default for ConnectionSlot<T> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<T> ConnectionSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `id` and returns whatever was held before.
    pub fn replace(&mut self, id: ConnectionId, value: T) -> Option<T> {
        self.held.replace((id, value)).map(|(_, old)| old)
    }

    pub fn id(&self) -> Option<ConnectionId> {
        self.held.as_ref().map(|(id, _)| *id)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_none()
    }

    pub fn get(&self, id: ConnectionId) -> Option<&T> {
        match &self.held {
            Some((held, value)) if *held == id => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: ConnectionId) -> Option<&mut T> {
        match &mut self.held {
            Some((held, value)) if *held == id => Some(value),
            _ => None,
        }
    }

    pub fn current_mut(&mut self) -> Option<(ConnectionId, &mut T)> {
        self.held.as_mut().map(|(id, value)| (*id, value))
    }

    /// Empties the slot only if it holds `id`.
    pub fn take_for(&mut self, id: ConnectionId) -> Option<T> {
        if self.id() == Some(id) {
            self.held.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    pub fn take(&mut self) -> Option<(ConnectionId, T)> {
        self.held.take()
    }
}
