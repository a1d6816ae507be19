mod engine;
mod env;
mod error;
mod host;

pub use engine::*;
pub use env::*;
pub use error::*;
pub use host::*;
