use std::str::FromStr;
use std::sync::Arc;

use cask_domain::{Directory, FlagCompletion, HostEnumerator};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    AffixedCompletion, Capabilities, CompletionRegistry, ContainerNames, EnvVarNames, FileNames,
    FixedList, NetworkNames, NoComplete, QualifiedCompletion, RestartPolicies, Signals,
    StaticCache, ATTACH_STREAMS, CGROUPNS_MODES, PLATFORMS, PULL_POLICIES,
};

/// IPC modes besides `container:<name>`.
pub const IPC_MODES: [&str; 4] = ["host", "none", "private", "shareable"];

/// Flags of `run` and `create` whose values cannot be usefully suggested.
pub const NO_COMPLETE_FLAGS: &[&str] = &[
    "add-host",
    "annotation",
    "blkio-weight",
    "blkio-weight-device",
    "cgroup-parent",
    "cpu-period",
    "cpu-quota",
    "cpu-rt-period",
    "cpu-rt-runtime",
    "cpu-shares",
    "cpus",
    "cpuset-cpus",
    "cpuset-mems",
    "device-cgroup-rule",
    "device-read-bps",
    "device-read-iops",
    "device-write-bps",
    "device-write-iops",
    "dns",
    "dns-option",
    "dns-search",
    "domainname",
    "entrypoint",
    "expose",
    "gpus",
    "group-add",
    "health-cmd",
    "health-interval",
    "health-retries",
    "health-start-interval",
    "health-start-period",
    "health-timeout",
    "hostname",
    "ip",
    "ip6",
    "isolation",
    "kernel-memory",
    "label",
    "link-local-ip",
    // TODO: complete log drivers and their options once the engine exposes them
    "log-driver",
    "log-opt",
    "mac-address",
    "memory",
    "memory-reservation",
    "memory-swap",
    "memory-swappiness",
    "mount",
    "name",
    "network-alias",
];

/// Resource flags of `update` without suggestions.
pub const UPDATE_NO_COMPLETE_FLAGS: &[&str] = &[
    "blkio-weight",
    "cpu-period",
    "cpu-quota",
    "cpu-rt-period",
    "cpu-rt-runtime",
    "cpu-shares",
    "cpus",
    "cpuset-cpus",
    "cpuset-mems",
    "memory",
    "memory-reservation",
    "memory-swap",
    "pids-limit",
];

/// Commands that have flag completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum CommandKind {
    Run,
    Create,
    Update,
    Stop,
    Kill,
}

/// Builds the completion registry of each command.
///
/// Holds the collaborators every completion is wired to: the engine directory,
/// the host enumerator and the cache for lists computed once.
#[derive(Clone)]
pub struct Completions {
    directory: Arc<dyn Directory>,
    host: Arc<dyn HostEnumerator>,
    cache: Arc<StaticCache>,
    show_container_ids: bool,
}

impl Completions {
    pub fn new(
        directory: Arc<dyn Directory>,
        host: Arc<dyn HostEnumerator>,
        cache: Arc<StaticCache>,
    ) -> Self {
        Self { directory, host, cache, show_container_ids: false }
    }

    pub fn show_container_ids(mut self, show_container_ids: bool) -> Self {
        self.show_container_ids = show_container_ids;
        self
    }

    /// Registry for the command called `command`; empty for commands without
    /// flag completions.
    pub fn registry_for(&self, command: &str) -> CompletionRegistry {
        CommandKind::from_str(command)
            .map(|kind| self.registry(kind))
            .unwrap_or_default()
    }

    pub fn registry(&self, kind: CommandKind) -> CompletionRegistry {
        let mut registry = CompletionRegistry::new();
        match kind {
            CommandKind::Run | CommandKind::Create => self.add_container_completions(&mut registry),
            CommandKind::Update => {
                for flag in UPDATE_NO_COMPLETE_FLAGS {
                    registry.register(*flag, NoComplete);
                }
                registry.register("restart", RestartPolicies);
            }
            CommandKind::Stop => {
                registry
                    .register_shared("signal", self.signals())
                    .register("timeout", NoComplete);
            }
            CommandKind::Kill => {
                registry.register_shared("signal", self.signals());
            }
        }
        registry
    }

    /// Completions `run` and `create` have in common.
    pub fn add_container_completions(&self, registry: &mut CompletionRegistry) {
        for flag in NO_COMPLETE_FLAGS {
            registry.register(*flag, NoComplete);
        }

        let capabilities = self.capabilities();
        registry
            .register("attach", FixedList::new(ATTACH_STREAMS))
            .register_shared("cap-add", capabilities.clone())
            .register_shared("cap-drop", capabilities)
            .register("cgroupns", FixedList::new(CGROUPNS_MODES))
            .register("env", EnvVarNames::default())
            .register("env-file", FileNames)
            .register("ipc", self.ipc())
            .register("link", self.link())
            .register("network", NetworkNames::new(self.directory.clone()))
            .register("platform", FixedList::new(PLATFORMS))
            .register("pull", FixedList::new(PULL_POLICIES))
            .register("restart", RestartPolicies)
            .register_shared("stop-signal", self.signals())
            .register("volumes-from", self.container_names());
    }

    fn container_names(&self) -> ContainerNames {
        ContainerNames::new(self.directory.clone(), true).include_ids(self.show_container_ids)
    }

    fn capabilities(&self) -> Arc<dyn FlagCompletion> {
        Arc::new(Capabilities::new(self.cache.clone(), self.host.clone()))
    }

    fn signals(&self) -> Arc<dyn FlagCompletion> {
        Arc::new(Signals::new(self.cache.clone(), self.host.clone()))
    }

    /// `--ipc`: a mode keyword or `container:<name>`.
    fn ipc(&self) -> QualifiedCompletion {
        QualifiedCompletion::new("container", ':', IPC_MODES, Arc::new(self.container_names()))
    }

    /// `--link`: `<name>[:alias]`.
    fn link(&self) -> AffixedCompletion {
        AffixedCompletion::postfixed(Arc::new(self.container_names()), ":")
    }
}

#[cfg(test)]
mod tests {
    use cask_domain::{Completion, CompletionContext, Directive, FlagName};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::test::{CountingHost, FakeDirectory};

    fn fixture(directory: Arc<FakeDirectory>) -> (Completions, Arc<CountingHost>) {
        let host = CountingHost::new(&["chown", "net_admin"], &["TERM", "KILL", "HUP"]);
        let completions = Completions::new(directory, host.clone(), Arc::new(StaticCache::new()));
        (completions, host)
    }

    async fn complete(registry: &CompletionRegistry, flag: &str, to_complete: &str) -> Completion {
        registry
            .complete(&FlagName::new(flag), &CompletionContext::new("run"), &[], to_complete)
            .await
    }

    #[test]
    fn test_run_and_create_share_flag_surface() {
        let (completions, _) = fixture(FakeDirectory::with_containers(&[]));
        let run = completions.registry(CommandKind::Run);
        let create = completions.registry(CommandKind::Create);

        assert_eq!(run.flags(), create.flags());
        assert_eq!(run.len(), NO_COMPLETE_FLAGS.len() + 14);
        for flag in [
            "cap-add",
            "cap-drop",
            "restart",
            "stop-signal",
            "ipc",
            "link",
            "network",
            "volumes-from",
            "pull",
            "attach",
            "cgroupns",
            "env",
            "env-file",
            "platform",
        ] {
            assert!(run.contains(&FlagName::new(flag)), "missing {flag}");
        }
    }

    #[tokio::test]
    async fn test_no_complete_flags() {
        let (completions, _) = fixture(FakeDirectory::with_containers(&["web"]));
        let registry = completions.registry(CommandKind::Run);

        for flag in NO_COMPLETE_FLAGS {
            let actual = complete(&registry, flag, "").await;
            assert_eq!(actual, Completion::default(), "flag {flag}");
        }
    }

    #[tokio::test]
    async fn test_capabilities_computed_once_across_flags() {
        let (completions, host) = fixture(FakeDirectory::with_containers(&[]));
        let run = completions.registry(CommandKind::Run);
        let create = completions.registry(CommandKind::Create);

        let cap_add = complete(&run, "cap-add", "").await;
        let cap_drop = complete(&create, "cap-drop", "CAP_").await;

        assert_eq!(cap_add, cap_drop);
        assert_eq!(cap_add.candidates, vec!["ALL", "CAP_CHOWN", "CAP_NET_ADMIN"]);
        assert_eq!(host.capability_calls(), 1);
    }

    #[tokio::test]
    async fn test_signals_shared_between_commands() {
        let (completions, host) = fixture(FakeDirectory::with_containers(&[]));

        let stop_signal = complete(&completions.registry(CommandKind::Run), "stop-signal", "").await;
        let kill_signal = complete(&completions.registry(CommandKind::Kill), "signal", "").await;

        assert_eq!(stop_signal.candidates, vec!["HUP", "KILL", "TERM"]);
        assert_eq!(stop_signal, kill_signal);
        assert_eq!(host.signal_calls(), 1);
    }

    #[tokio::test]
    async fn test_ipc_and_link_wiring() {
        let (completions, _) = fixture(FakeDirectory::with_containers(&["web", "db"]));
        let registry = completions.registry(CommandKind::Run);

        let ipc = complete(&registry, "ipc", "container:").await;
        let link = complete(&registry, "link", "w").await;

        assert_eq!(
            ipc,
            Completion::new(["container:web", "container:db"], Directive::NO_FILE_COMP)
        );
        assert_eq!(link, Completion::new(["web:", "db:"], Directive::NO_SPACE));
    }

    #[tokio::test]
    async fn test_volumes_from_includes_ids_when_enabled() {
        let directory = FakeDirectory::with_containers(&["web"]);
        let (completions, _) = fixture(directory.clone());
        let registry = completions.show_container_ids(true).registry(CommandKind::Create);

        complete(&registry, "volumes-from", "").await;

        let query = &directory.queries()[0];
        assert!(query.all);
        assert!(query.include_ids);
    }

    #[tokio::test]
    async fn test_dynamic_flags_degrade_when_engine_fails() {
        let (completions, _) = fixture(FakeDirectory::failing());
        let registry = completions.registry(CommandKind::Run);

        assert_eq!(
            complete(&registry, "network", "").await,
            Completion::empty(Directive::NO_FILE_COMP)
        );
        assert_eq!(
            complete(&registry, "volumes-from", "").await,
            Completion::empty(Directive::NO_FILE_COMP)
        );
        assert_eq!(
            complete(&registry, "link", "").await,
            Completion::empty(Directive::NO_SPACE)
        );
    }

    #[tokio::test]
    async fn test_fixed_lists() {
        let (completions, _) = fixture(FakeDirectory::with_containers(&[]));
        let registry = completions.registry(CommandKind::Run);

        assert_eq!(
            complete(&registry, "pull", "").await.candidates,
            vec!["always", "missing", "never"]
        );
        assert_eq!(
            complete(&registry, "attach", "").await.candidates,
            vec!["stderr", "stdin", "stdout"]
        );
        assert_eq!(complete(&registry, "cgroupns", "").await.candidates, vec!["host", "private"]);
        assert!(complete(&registry, "platform", "")
            .await
            .candidates
            .contains(&"linux/amd64".to_string()));
    }

    #[tokio::test]
    async fn test_update_restart() {
        let (completions, _) = fixture(FakeDirectory::with_containers(&[]));
        let registry = completions.registry_for("update");

        let actual = complete(&registry, "restart", "").await;

        assert_eq!(actual.candidates, vec!["disabled", "always", "on-failure", "unless-stopped"]);
        assert!(!registry.contains(&FlagName::new("ipc")));
    }

    #[test]
    fn test_unknown_command_has_empty_registry() {
        let (completions, _) = fixture(FakeDirectory::with_containers(&[]));
        assert!(completions.registry_for("exec").is_empty());
    }

    #[test]
    fn test_every_command_has_completions() {
        let (completions, _) = fixture(FakeDirectory::with_containers(&[]));
        for kind in CommandKind::iter() {
            assert!(!completions.registry_for(&kind.to_string()).is_empty(), "{kind}");
        }
    }
}
