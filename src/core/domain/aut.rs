//! Application-under-test addressing.

use std::fmt;

/// Identity of one AUT in one environment, e.g. `("tyro", "ts2")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutEnvironmentKey {
    aut: String,
    environment: String,
}

/// The variable names an [`AutEnvironmentKey`] maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutVars {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl AutEnvironmentKey {
    pub fn new(aut: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            aut: aut.into(),
            environment: environment.into(),
        }
    }

    pub fn aut(&self) -> &str {
        &self.aut
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// `{AUT}_{ENV}_` with both parts upper-cased.
    fn prefix(&self) -> String {
        format!(
            "{}_{}_",
            self.aut.to_uppercase(),
            self.environment.to_uppercase()
        )
    }

    /// Variable names for URL, username and password.
    pub fn vars(&self) -> AutVars {
        let prefix = self.prefix();
        AutVars {
            url: format!("{}URL", prefix),
            username: format!("{}USERNAME", prefix),
            password: format!("{}PASSWORD", prefix),
        }
    }
}

impl fmt::Display for AutEnvironmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.aut, self.environment)
    }
}
