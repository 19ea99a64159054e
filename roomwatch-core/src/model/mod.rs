mod event;
mod origin;
mod room;

pub use event::InboundEvent;
pub use origin::PageOrigin;
pub use room::{InjectedValue, RoomId};
