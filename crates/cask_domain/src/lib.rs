mod completion;
mod directive;
mod directory;
mod env;
mod error;
mod flag_name;
mod host;

pub use completion::*;
pub use directive::*;
pub use directory::*;
pub use env::*;
pub use error::*;
pub use flag_name::*;
pub use host::*;
