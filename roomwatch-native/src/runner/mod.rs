mod live_reload_runner;
mod runner_handle;
mod watch_config;

pub use live_reload_runner::*;
pub use runner_handle::*;
pub use watch_config::*;
