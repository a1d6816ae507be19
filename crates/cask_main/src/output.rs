use cask_domain::{Completion, Directive};

/// Encodes a completion for the shell scripts: one candidate per line, then
/// `:<directive bits>`.
pub fn render(completion: &Completion) -> String {
    completion
        .candidates
        .iter()
        // A candidate spanning lines would be read as several.
        .map(|candidate| format!("{}\n", candidate.replace('\n', " ")))
        .chain(std::iter::once(format!(":{}\n", completion.directive.bits())))
        .collect()
}

/// Human readable summary, written to stderr.
pub fn describe(directive: &Directive) -> String {
    format!("Completion ended with directive: {directive}")
}
