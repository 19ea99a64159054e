mod connector;
mod transport_error;
mod ws_connector;

pub use connector::*;
pub use transport_error::*;
pub use ws_connector::*;
