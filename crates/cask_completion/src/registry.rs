use std::collections::HashMap;
use std::sync::Arc;

use cask_domain::{Completion, CompletionContext, FlagCompletion, FlagName};
use tracing::debug;

/// Flag completions for one command.
///
/// Built once while the command is set up and only read afterwards.
#[derive(Default, Clone)]
pub struct CompletionRegistry {
    completions: HashMap<FlagName, Arc<dyn FlagCompletion>>,
}

impl CompletionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `completion` to `flag`, replacing any earlier binding.
    pub fn register(
        &mut self,
        flag: impl Into<FlagName>,
        completion: impl FlagCompletion + 'static,
    ) -> &mut Self {
        self.register_shared(flag, Arc::new(completion))
    }

    /// Like [`CompletionRegistry::register`] for a completion that is bound to
    /// several flags.
    pub fn register_shared(
        &mut self,
        flag: impl Into<FlagName>,
        completion: Arc<dyn FlagCompletion>,
    ) -> &mut Self {
        self.completions.insert(flag.into(), completion);
        self
    }

    pub fn lookup(&self, flag: &FlagName) -> Option<Arc<dyn FlagCompletion>> {
        self.completions.get(flag).cloned()
    }

    pub fn contains(&self, flag: &FlagName) -> bool {
        self.completions.contains_key(flag)
    }

    /// Registered flags, sorted by name.
    pub fn flags(&self) -> Vec<&FlagName> {
        let mut flags = self.completions.keys().collect::<Vec<_>>();
        flags.sort();
        flags
    }

    pub fn len(&self) -> usize {
        self.completions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// Runs the completion bound to `flag`. A flag without a binding gets no
    /// candidates and no directive.
    pub async fn complete(
        &self,
        flag: &FlagName,
        context: &CompletionContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        match self.lookup(flag) {
            Some(completion) => completion.complete(context, args, to_complete).await,
            None => {
                debug!(flag = %flag, command = %context.command, "No completion registered");
                Completion::default()
            }
        }
    }
}
