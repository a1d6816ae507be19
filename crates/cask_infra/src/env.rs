use std::path::PathBuf;

use cask_domain::{Environment, EnvironmentService, Result, DEFAULT_HOST};
use tracing::warn;

pub const HOST_VAR: &str = "CASK_HOST";
pub const TIMEOUT_VAR: &str = "CASK_COMPLETION_TIMEOUT_MS";
pub const SHOW_IDS_VAR: &str = "CASK_COMPLETION_SHOW_CONTAINER_IDS";

/// Reads the [`Environment`] from process environment variables, after
/// loading a `.env` file if one is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaskEnvironmentService;

impl CaskEnvironmentService {
    pub fn new() -> Self {
        Self
    }

    /// Where logs and other state live, independent of any variable.
    pub fn base_path() -> PathBuf {
        dirs::cache_dir()
            .map(|dir| dir.join("cask"))
            .unwrap_or(PathBuf::from(".").join(".cask"))
    }

    /// Builds the environment from `var`, which returns the value of a
    /// variable if it is set. Only an unusable host or timeout is an error; an
    /// unrecognised show-IDs value is logged and read as "no".
    pub fn resolve<F>(var: F, base_path: PathBuf) -> Result<Environment>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = Environment::parse_host(&var(HOST_VAR).unwrap_or(DEFAULT_HOST.to_string()))?;
        let mut environment = Environment::new(host, base_path);

        if let Some(timeout) = var(TIMEOUT_VAR) {
            environment = environment.lookup_timeout(Environment::parse_timeout(&timeout)?);
        }
        if let Some(show_ids) = var(SHOW_IDS_VAR) {
            let enabled = Environment::parse_flag(&show_ids).unwrap_or_else(|| {
                warn!(
                    var = SHOW_IDS_VAR,
                    value = %show_ids,
                    "Unrecognised value, container IDs stay hidden"
                );
                false
            });
            environment = environment.show_container_ids(enabled);
        }

        Ok(environment)
    }
}

impl EnvironmentService for CaskEnvironmentService {
    fn get_environment(&self) -> Result<Environment> {
        dotenv::dotenv().ok();
        Self::resolve(|name| std::env::var(name).ok(), Self::base_path())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use cask_domain::{Error, DEFAULT_TIMEOUT_MS};
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolve(vars: &[(&str, &str)]) -> Result<Environment> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        CaskEnvironmentService::resolve(|name| vars.get(name).cloned(), PathBuf::from("/tmp/cask"))
    }

    #[test]
    fn test_defaults() {
        let actual = resolve(&[]).unwrap();

        assert_eq!(actual.host.as_str(), DEFAULT_HOST);
        assert_eq!(actual.lookup_timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert!(!actual.show_container_ids);
        assert_eq!(actual.base_path, PathBuf::from("/tmp/cask"));
    }

    #[test]
    fn test_overrides() {
        let actual = resolve(&[
            (HOST_VAR, "https://engine.local:2376"),
            (TIMEOUT_VAR, "750"),
            (SHOW_IDS_VAR, "yes"),
        ])
        .unwrap();

        assert_eq!(actual.host.as_str(), "https://engine.local:2376/");
        assert_eq!(actual.lookup_timeout, Duration::from_millis(750));
        assert!(actual.show_container_ids);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(resolve(&[(TIMEOUT_VAR, "0")]), Err(Error::NonPositiveTimeout)));
        assert!(matches!(resolve(&[(TIMEOUT_VAR, "soon")]), Err(Error::MalformedTimeout(_))));
        assert!(matches!(resolve(&[(HOST_VAR, "::")]), Err(Error::InvalidHost(_, _))));
    }

    #[test]
    fn test_unrecognised_show_ids_reads_as_no() {
        let actual = resolve(&[(SHOW_IDS_VAR, "sometimes")]).unwrap();
        assert!(!actual.show_container_ids);

        let actual = resolve(&[(SHOW_IDS_VAR, "1")]).unwrap();
        assert!(actual.show_container_ids);
    }
}
