mod cache;
mod composite;
mod flags;
mod registry;
mod source;

pub use cache::*;
pub use composite::*;
pub use flags::*;
pub use registry::*;
pub use source::*;
