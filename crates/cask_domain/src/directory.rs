use async_trait::async_trait;
use derive_setters::Setters;

/// Parameters for a container name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct ContainerQuery {
    /// Only names starting with this text are returned.
    pub prefix: String,
    /// Include stopped containers.
    pub all: bool,
    /// Return container IDs in addition to names.
    pub include_ids: bool,
}

impl ContainerQuery {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), ..Default::default() }
    }
}

/// Name resolution against the container engine.
///
/// Lookups may be slow or fail; callers in the completion path treat any error
/// as "no results".
#[async_trait]
pub trait Directory: Send + Sync {
    /// Names (and optionally IDs) of containers matching the query.
    async fn containers(&self, query: &ContainerQuery) -> anyhow::Result<Vec<String>>;

    /// Names of networks starting with `prefix`.
    async fn networks(&self, prefix: &str) -> anyhow::Result<Vec<String>>;
}
