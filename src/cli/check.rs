//! Check command - validate every registry entry against the environment.

use std::path::Path;

use crate::cli::{context, output};
use crate::core::config::Config;
use crate::core::registry::Registry;
use crate::error::Result;

/// Resolve URL and credentials for every declared pair.
///
/// Prints one line per pair, then fails with every problem found.
pub fn execute(env_file: Option<&Path>, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let registry = Registry::from_config(&config);
    let snapshot = context::snapshot(env_file)?;

    for report in registry.check(&snapshot) {
        if report.is_ok() {
            output::success(&report.key.to_string());
            continue;
        }

        output::failure(&report.key.to_string());
        for problem in &report.problems {
            output::list_item(problem);
        }
    }

    registry.validate(&snapshot)?;
    output::dimmed(&format!("{} entries ok", registry.keys().len()));
    Ok(())
}
