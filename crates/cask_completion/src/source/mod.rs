mod dynamic;
mod fixed;

use std::sync::Arc;

pub use dynamic::*;
pub use fixed::*;

/// A list of candidates that does not depend on what the user typed.
pub trait CandidateSource: Send + Sync {
    fn list(&self) -> Arc<Vec<String>>;
}
