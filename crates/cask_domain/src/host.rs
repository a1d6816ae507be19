/// Enumerates capability and signal names known on the host.
///
/// Results are deterministic for the lifetime of a process but may be
/// expensive to compute, so callers memoize them.
pub trait HostEnumerator: Send + Sync {
    /// Capability names in lowercase without the `cap_` prefix, e.g.
    /// `net_admin`.
    fn known_capabilities(&self) -> Vec<String>;

    /// Signal names without the `SIG` prefix, e.g. `TERM`.
    fn known_signals(&self) -> Vec<String>;
}
