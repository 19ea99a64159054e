pub use roomwatch_core::RoomId;

pub mod model {
    pub use roomwatch_core::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use roomwatch_wasm::*;
}

#[cfg(feature = "native")]
pub mod native {
    pub use roomwatch_native::*;
}
