use cask_domain::HostEnumerator;

/// Capabilities known to the Linux kernel, in the order of their numeric
/// values.
const CAPABILITIES: [&str; 41] = [
    "chown",
    "dac_override",
    "dac_read_search",
    "fowner",
    "fsetid",
    "kill",
    "setgid",
    "setuid",
    "setpcap",
    "linux_immutable",
    "net_bind_service",
    "net_broadcast",
    "net_admin",
    "net_raw",
    "ipc_lock",
    "ipc_owner",
    "sys_module",
    "sys_rawio",
    "sys_chroot",
    "sys_ptrace",
    "sys_pacct",
    "sys_admin",
    "sys_boot",
    "sys_nice",
    "sys_resource",
    "sys_time",
    "sys_tty_config",
    "mknod",
    "lease",
    "audit_write",
    "audit_control",
    "setfcap",
    "mac_override",
    "mac_admin",
    "syslog",
    "wake_alarm",
    "block_suspend",
    "audit_read",
    "perfmon",
    "bpf",
    "checkpoint_restore",
];

/// Signals available on every supported platform.
const COMMON_SIGNALS: [&str; 30] = [
    "ABRT", "ALRM", "BUS", "CHLD", "CONT", "FPE", "HUP", "ILL", "INT", "IO", "IOT", "KILL",
    "PIPE", "PROF", "QUIT", "SEGV", "STOP", "SYS", "TERM", "TRAP", "TSTP", "TTIN", "TTOU", "URG",
    "USR1", "USR2", "VTALRM", "WINCH", "XCPU", "XFSZ",
];

const LINUX_SIGNALS: [&str; 4] = ["CLD", "POLL", "PWR", "STKFLT"];

const BSD_SIGNALS: [&str; 2] = ["EMT", "INFO"];

/// Real-time signals are named relative to `RTMIN` (up to `RTMIN+15`) and
/// `RTMAX` (down to `RTMAX-14`).
const RTMIN_OFFSETS: u32 = 15;
const RTMAX_OFFSETS: u32 = 14;

/// Capability and signal names of the platform this binary was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl NativeHost {
    fn realtime_signals() -> Vec<String> {
        let mut names = vec!["RTMIN".to_string()];
        names.extend((1..=RTMIN_OFFSETS).map(|i| format!("RTMIN+{i}")));
        names.extend((1..=RTMAX_OFFSETS).rev().map(|i| format!("RTMAX-{i}")));
        names.push("RTMAX".to_string());
        names
    }
}

impl HostEnumerator for NativeHost {
    fn known_capabilities(&self) -> Vec<String> {
        CAPABILITIES.iter().map(|name| name.to_string()).collect()
    }

    fn known_signals(&self) -> Vec<String> {
        let mut names = COMMON_SIGNALS
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        if cfg!(target_os = "linux") {
            names.extend(LINUX_SIGNALS.iter().map(|name| name.to_string()));
            names.extend(Self::realtime_signals());
        } else {
            names.extend(BSD_SIGNALS.iter().map(|name| name.to_string()));
        }
        names
    }
}
