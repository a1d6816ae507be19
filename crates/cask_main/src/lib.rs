mod app;
mod cli;
mod log;
mod output;

pub use app::*;
pub use cli::*;
pub use log::{init_tracing, Guard};
pub use output::*;
