use std::io::Write;
use std::sync::Arc;

use cask_completion::{Completions, StaticCache};
use cask_domain::{
    Completion, CompletionContext, Directory, Environment, EnvironmentService, FlagName,
};
use cask_infra::{CaskEnvironmentService, EngineDirectory, NativeHost, UnavailableDirectory};
use tracing::{debug, warn};

use crate::cli::{Cli, Command};
use crate::log::init_tracing;
use crate::output::{describe, render};

/// Answers completion requests for every command of the tool.
pub struct App {
    completions: Completions,
}

impl App {
    /// Builds the app from a possibly invalid configuration. Without a usable
    /// configuration the engine is treated as unavailable; completions that
    /// need no engine keep working.
    pub fn load(environment: cask_domain::Result<Environment>) -> Self {
        match environment {
            Ok(environment) => Self::from_environment(&environment),
            Err(error) => {
                warn!(error = %error, "Invalid configuration, engine lookups disabled");
                Self::with_directory(Arc::new(UnavailableDirectory::new(error)), false)
            }
        }
    }

    /// Wires the completions to the engine and host described by
    /// `environment`.
    pub fn from_environment(environment: &Environment) -> Self {
        match EngineDirectory::new(environment) {
            Ok(directory) => {
                Self::with_directory(Arc::new(directory), environment.show_container_ids)
            }
            Err(error) => {
                warn!(error = %error, "Failed to set up engine client, engine lookups disabled");
                Self::with_directory(Arc::new(UnavailableDirectory::new(error)), false)
            }
        }
    }

    fn with_directory(directory: Arc<dyn Directory>, show_container_ids: bool) -> Self {
        let completions =
            Completions::new(directory, Arc::new(NativeHost), Arc::new(StaticCache::new()))
                .show_container_ids(show_container_ids);
        Self { completions }
    }

    pub async fn complete(
        &self,
        command: &str,
        flag: &str,
        args: &[String],
        to_complete: &str,
    ) -> Completion {
        let flag = FlagName::new(flag);
        let context = CompletionContext::new(command);
        let registry = self.completions.registry_for(command);

        let completion = registry.complete(&flag, &context, args, to_complete).await;
        debug!(
            command,
            flag = %flag,
            to_complete,
            candidates = completion.candidates.len(),
            directive = %completion.directive,
            "Completed flag value"
        );
        completion
    }

    /// Flags of `command` that have completions, sorted.
    pub fn flags(&self, command: &str) -> Vec<String> {
        self.completions
            .registry_for(command)
            .flags()
            .into_iter()
            .map(|flag| flag.to_string())
            .collect()
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let environment = CaskEnvironmentService::new().get_environment();
    let log_path = environment
        .as_ref()
        .map(Environment::log_path)
        .unwrap_or_else(|_| CaskEnvironmentService::base_path().join("logs"));

    // Logging is optional: a completion request must still be answered when
    // the log directory cannot be written.
    let _guard = init_tracing(log_path).ok();
    let app = App::load(environment);

    match cli.command {
        Command::Complete { command, flag, to_complete, args } => {
            let completion = app.complete(&command, &flag, &args, &to_complete).await;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(render(&completion).as_bytes())?;
            stdout.flush()?;
            eprintln!("{}", describe(&completion.directive));
        }
        Command::Flags { command } => {
            for flag in app.flags(&command) {
                println!("{flag}");
            }
        }
    }

    Ok(())
}
