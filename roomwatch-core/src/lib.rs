pub mod constants;
pub mod error;
pub mod filter;
pub mod machine;
pub mod model;

pub use error::{FrameError, OriginError};
pub use filter::{FilterOutcome, Filterable, apply_filter};
pub use machine::{
    Command, ConnectionId, ConnectionSlot, ConnectionState, Input, ReloadMachine, Timings,
};
pub use model::{InboundEvent, InjectedValue, PageOrigin, RoomId};
