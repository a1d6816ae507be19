use std::sync::Arc;

use async_trait::async_trait;
use cask_domain::{Completion, CompletionContext, Directive, FlagCompletion};

use crate::DynamicSource;

/// Prefixes every value with `prefix`.
pub fn prefix_with(prefix: &str, values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| format!("{prefix}{value}"))
        .collect()
}

/// Appends `postfix` to every value.
pub fn postfix_with(postfix: &str, values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| format!("{value}{postfix}"))
        .collect()
}

/// Which part of a `keyword | qualifier:name` value is being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch<'a> {
    /// Nothing typed yet, or a prefix of the qualifier without its separator.
    Qualifier,
    /// The qualifier and separator are typed; holds the rest.
    Scoped(&'a str),
    /// Anything else.
    Keyword,
}

impl<'a> Branch<'a> {
    /// Classifies `to_complete` against `qualifier` (without separator).
    ///
    /// A prefix of the qualifier always selects [`Branch::Qualifier`], even if
    /// it could also start a keyword: the separator has to be typed before a
    /// name can be resolved.
    pub fn classify(to_complete: &'a str, qualifier: &str, separator: char) -> Self {
        if qualifier.starts_with(to_complete) {
            return Branch::Qualifier;
        }

        match to_complete
            .strip_prefix(qualifier)
            .and_then(|rest| rest.strip_prefix(separator))
        {
            Some(rest) => Branch::Scoped(rest),
            None => Branch::Keyword,
        }
    }
}

/// Completes values of the form `keyword` or `qualifier:name`, where `name`
/// comes from a dynamic source, e.g. `--ipc container:web`.
pub struct QualifiedCompletion {
    qualifier: String,
    separator: char,
    keywords: Vec<String>,
    names: Arc<dyn DynamicSource>,
}

impl QualifiedCompletion {
    pub fn new<I, S>(
        qualifier: impl Into<String>,
        separator: char,
        keywords: I,
        names: Arc<dyn DynamicSource>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            qualifier: qualifier.into(),
            separator,
            keywords: keywords.into_iter().map(Into::into).collect(),
            names,
        }
    }

    /// The qualifier followed by its separator, e.g. `container:`.
    pub fn scope(&self) -> String {
        format!("{}{}", self.qualifier, self.separator)
    }

    pub fn classify<'a>(&self, to_complete: &'a str) -> Branch<'a> {
        Branch::classify(to_complete, &self.qualifier, self.separator)
    }
}

#[async_trait]
impl FlagCompletion for QualifiedCompletion {
    async fn complete(&self, _: &CompletionContext, _: &[String], to_complete: &str) -> Completion {
        match self.classify(to_complete) {
            Branch::Qualifier => Completion::new([self.scope()], Directive::NO_SPACE),
            Branch::Scoped(rest) => {
                let names = self.names.list(rest).await;
                Completion::new(prefix_with(&self.scope(), names), Directive::NO_FILE_COMP)
            }
            Branch::Keyword => {
                let candidates = std::iter::once(self.scope()).chain(self.keywords.iter().cloned());
                Completion::new(candidates, Directive::NO_FILE_COMP)
            }
        }
    }
}

/// Appends a fixed postfix to every dynamic candidate, e.g. `--link web:`
/// where the user goes on to type an alias.
pub struct AffixedCompletion {
    names: Arc<dyn DynamicSource>,
    postfix: String,
}

impl AffixedCompletion {
    /// The value is not complete yet, so the shell is told not to add a space.
    pub fn postfixed(names: Arc<dyn DynamicSource>, postfix: impl Into<String>) -> Self {
        Self { names, postfix: postfix.into() }
    }
}

#[async_trait]
impl FlagCompletion for AffixedCompletion {
    async fn complete(&self, _: &CompletionContext, _: &[String], to_complete: &str) -> Completion {
        let names = self.names.list(to_complete).await;
        Completion::new(postfix_with(&self.postfix, names), Directive::NO_SPACE)
    }
}
