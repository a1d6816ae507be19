use std::sync::Arc;

use async_trait::async_trait;
use cask_domain::{
    Completion, CompletionContext, ContainerQuery, Directive, Directory, FlagCompletion,
};
use tracing::debug;

/// Candidates resolved at completion time from what the user has typed.
///
/// Lookups are best effort: a failing lookup yields an empty list, never an
/// error.
#[async_trait]
pub trait DynamicSource: Send + Sync {
    async fn list(&self, to_complete: &str) -> Vec<String>;
}

/// Container names from the engine.
#[derive(Clone)]
pub struct ContainerNames {
    directory: Arc<dyn Directory>,
    all: bool,
    include_ids: bool,
}

impl ContainerNames {
    /// `all` includes stopped containers.
    pub fn new(directory: Arc<dyn Directory>, all: bool) -> Self {
        Self { directory, all, include_ids: false }
    }

    pub fn include_ids(mut self, include_ids: bool) -> Self {
        self.include_ids = include_ids;
        self
    }
}

#[async_trait]
impl DynamicSource for ContainerNames {
    async fn list(&self, to_complete: &str) -> Vec<String> {
        let query = ContainerQuery::new(to_complete)
            .all(self.all)
            .include_ids(self.include_ids);

        match self.directory.containers(&query).await {
            Ok(names) => names,
            Err(error) => {
                debug!(error = %error, prefix = to_complete, "Container lookup failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl FlagCompletion for ContainerNames {
    async fn complete(&self, _: &CompletionContext, _: &[String], to_complete: &str) -> Completion {
        Completion::new(self.list(to_complete).await, Directive::NO_FILE_COMP)
    }
}

/// Network names from the engine.
#[derive(Clone)]
pub struct NetworkNames {
    directory: Arc<dyn Directory>,
}

impl NetworkNames {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl DynamicSource for NetworkNames {
    async fn list(&self, to_complete: &str) -> Vec<String> {
        match self.directory.networks(to_complete).await {
            Ok(names) => names,
            Err(error) => {
                debug!(error = %error, prefix = to_complete, "Network lookup failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl FlagCompletion for NetworkNames {
    async fn complete(&self, _: &CompletionContext, _: &[String], to_complete: &str) -> Completion {
        Completion::new(self.list(to_complete).await, Directive::NO_FILE_COMP)
    }
}
