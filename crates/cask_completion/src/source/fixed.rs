use std::sync::Arc;

use async_trait::async_trait;
use cask_domain::{Completion, CompletionContext, Directive, FlagCompletion, HostEnumerator};

use crate::{CacheKey, CandidateSource, StaticCache};

/// Magic value for "all capabilities".
pub const ALL_CAPABILITIES: &str = "ALL";

pub const RESTART_POLICIES: [&str; 4] = ["disabled", "always", "on-failure", "unless-stopped"];
pub const ATTACH_STREAMS: [&str; 3] = ["stderr", "stdin", "stdout"];
pub const CGROUPNS_MODES: [&str; 2] = ["host", "private"];
pub const PULL_POLICIES: [&str; 3] = ["always", "missing", "never"];

/// Platforms offered for `--platform`. Not exhaustive; any `os[/arch[/variant]]`
/// is accepted by the engine.
pub const PLATFORMS: [&str; 20] = [
    "linux",
    "linux/386",
    "linux/amd64",
    "linux/arm",
    "linux/arm/v5",
    "linux/arm/v6",
    "linux/arm/v7",
    "linux/arm64",
    "linux/arm64/v8",
    "linux/mips64",
    "linux/mips64le",
    "linux/ppc64le",
    "linux/riscv64",
    "linux/s390x",
    "windows",
    "windows/amd64",
    "windows/arm64",
    "darwin",
    "darwin/amd64",
    "darwin/arm64",
];

fn keywords(list: &[String]) -> Completion {
    Completion::new(list.iter().cloned(), Directive::NO_FILE_COMP)
}

/// Completes from a fixed list of keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedList(Arc<Vec<String>>);

impl FixedList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Arc::new(values.into_iter().map(Into::into).collect()))
    }
}

impl CandidateSource for FixedList {
    fn list(&self) -> Arc<Vec<String>> {
        self.0.clone()
    }
}

#[async_trait]
impl FlagCompletion for FixedList {
    async fn complete(&self, _: &CompletionContext, _: &[String], _: &str) -> Completion {
        keywords(&self.0)
    }
}

/// For flags without useful suggestions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoComplete;

#[async_trait]
impl FlagCompletion for NoComplete {
    async fn complete(&self, _: &CompletionContext, _: &[String], _: &str) -> Completion {
        Completion::default()
    }
}

/// Leaves completion to the shell's own filename completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileNames;

#[async_trait]
impl FlagCompletion for FileNames {
    async fn complete(&self, _: &CompletionContext, _: &[String], _: &str) -> Completion {
        Completion::empty(Directive::DEFAULT)
    }
}

/// Names of environment variables, by default those set for the current
/// process.
#[derive(Debug, Clone, Copy)]
pub struct EnvVarNames {
    names: fn() -> Vec<String>,
}

impl EnvVarNames {
    pub fn new(names: fn() -> Vec<String>) -> Self {
        Self { names }
    }

    pub fn list(&self) -> Vec<String> {
        (self.names)()
    }

    fn process_vars() -> Vec<String> {
        std::env::vars_os()
            .map(|(name, _)| name.to_string_lossy().into_owned())
            .collect()
    }
}

impl Default for EnvVarNames {
    fn default() -> Self {
        Self::new(Self::process_vars)
    }
}

#[async_trait]
impl FlagCompletion for EnvVarNames {
    async fn complete(&self, _: &CompletionContext, _: &[String], _: &str) -> Completion {
        Completion::new(self.list(), Directive::NO_FILE_COMP)
    }
}

/// Valid restart policies, in the order they are documented.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestartPolicies;

impl CandidateSource for RestartPolicies {
    fn list(&self) -> Arc<Vec<String>> {
        Arc::new(RESTART_POLICIES.iter().map(|p| p.to_string()).collect())
    }
}

#[async_trait]
impl FlagCompletion for RestartPolicies {
    async fn complete(&self, _: &CompletionContext, _: &[String], _: &str) -> Completion {
        keywords(&self.list())
    }
}

/// All capabilities known to the host, rendered as `CAP_<NAME>` and preceded
/// by [`ALL_CAPABILITIES`]. Computed once per cache.
#[derive(Clone)]
pub struct Capabilities {
    cache: Arc<StaticCache>,
    host: Arc<dyn HostEnumerator>,
}

impl Capabilities {
    pub fn new(cache: Arc<StaticCache>, host: Arc<dyn HostEnumerator>) -> Self {
        Self { cache, host }
    }

    fn compute(host: &dyn HostEnumerator) -> Vec<String> {
        let known = host.known_capabilities();
        let mut out = Vec::with_capacity(known.len() + 1);
        out.push(ALL_CAPABILITIES.to_string());
        out.extend(
            known
                .iter()
                .map(|name| format!("CAP_{}", name.to_uppercase())),
        );
        out
    }
}

impl CandidateSource for Capabilities {
    fn list(&self) -> Arc<Vec<String>> {
        self.cache
            .get_or_compute(CacheKey::Capabilities, || Self::compute(self.host.as_ref()))
    }
}

#[async_trait]
impl FlagCompletion for Capabilities {
    async fn complete(&self, _: &CompletionContext, _: &[String], _: &str) -> Completion {
        keywords(&self.list())
    }
}

/// Signal names known to the host, sorted. Computed once per cache.
#[derive(Clone)]
pub struct Signals {
    cache: Arc<StaticCache>,
    host: Arc<dyn HostEnumerator>,
}

impl Signals {
    pub fn new(cache: Arc<StaticCache>, host: Arc<dyn HostEnumerator>) -> Self {
        Self { cache, host }
    }
}

impl CandidateSource for Signals {
    fn list(&self) -> Arc<Vec<String>> {
        self.cache.get_or_compute(CacheKey::Signals, || {
            let mut names = self.host.known_signals();
            names.sort();
            names
        })
    }
}

#[async_trait]
impl FlagCompletion for Signals {
    async fn complete(&self, _: &CompletionContext, _: &[String], _: &str) -> Completion {
        keywords(&self.list())
    }
}
