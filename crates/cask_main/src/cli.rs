use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cask", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print completion candidates for a flag value.
    ///
    /// Called by the generated shell scripts. Prints one candidate per line
    /// followed by `:<directive>`.
    #[command(name = "__complete", hide = true)]
    Complete {
        /// Command being completed, e.g. `run`
        command: String,

        /// Flag whose value is being completed, without dashes
        flag: String,

        /// Text typed so far
        #[arg(default_value = "", allow_hyphen_values = true)]
        to_complete: String,

        /// Arguments already on the command line
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// List the flags of a command that have value completions.
    Flags {
        /// Command name, e.g. `run`
        command: String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_complete() {
        let actual = Cli::try_parse_from([
            "cask",
            "__complete",
            "run",
            "ipc",
            "container:",
            "--",
            "--rm",
            "alpine",
        ])
        .unwrap();

        let expected = Command::Complete {
            command: "run".to_string(),
            flag: "ipc".to_string(),
            to_complete: "container:".to_string(),
            args: vec!["--rm".to_string(), "alpine".to_string()],
        };
        assert_eq!(actual.command, expected);
    }

    #[test]
    fn test_parse_complete_without_text() {
        let actual = Cli::try_parse_from(["cask", "__complete", "run", "restart"]).unwrap();

        let expected = Command::Complete {
            command: "run".to_string(),
            flag: "restart".to_string(),
            to_complete: String::new(),
            args: Vec::new(),
        };
        assert_eq!(actual.command, expected);
    }

    #[test]
    fn test_parse_flags() {
        let actual = Cli::try_parse_from(["cask", "flags", "kill"]).unwrap();
        assert_eq!(actual.command, Command::Flags { command: "kill".to_string() });
    }
}
