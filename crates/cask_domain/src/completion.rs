use async_trait::async_trait;

use crate::Directive;

/// Candidates for a flag value together with the directive for the shell.
///
/// Candidates keep the order in which they were produced; duplicates are left
/// to the source that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub candidates: Vec<String>,
    pub directive: Directive,
}

impl Completion {
    pub fn new<I, S>(candidates: I, directive: Directive) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            directive,
        }
    }

    /// No candidates, only a directive.
    pub fn empty(directive: Directive) -> Self {
        Self { candidates: Vec::new(), directive }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// What the command framework knows about the invocation being completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionContext {
    /// Name of the command whose flag is being completed, e.g. `run`.
    pub command: String,
}

impl CompletionContext {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

/// Produces candidates for the value of a single flag.
///
/// Implementations never fail: anything that goes wrong degrades to fewer (or
/// no) candidates so that interactive completion stays responsive.
#[async_trait]
pub trait FlagCompletion: Send + Sync {
    async fn complete(
        &self,
        context: &CompletionContext,
        args: &[String],
        to_complete: &str,
    ) -> Completion;
}
