mod reload;
mod runner;
mod transport;

pub use reload::*;
pub use runner::*;
pub use transport::*;
