use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Long name of a command-line flag, without the leading dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagName(String);

impl FlagName {
    pub fn new(value: impl ToString) -> Self {
        let value = value.to_string();
        FlagName(value.trim_start_matches('-').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FlagName {
    fn from(value: &str) -> Self {
        FlagName::new(value)
    }
}

impl From<String> for FlagName {
    fn from(value: String) -> Self {
        FlagName::new(value)
    }
}

impl Display for FlagName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
