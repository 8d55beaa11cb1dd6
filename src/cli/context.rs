//! Snapshot and resolver setup shared by CLI commands.

use std::path::Path;

use tracing::debug;

use crate::core::config::Config;
use crate::core::constants::{ENVIRONMENT_VAR, NODE_ENV_VAR};
use crate::core::registry::Registry;
use crate::core::{Resolver, Snapshot};
use crate::error::Result;

/// Take the environment snapshot for this invocation.
pub fn snapshot(env_file: Option<&Path>) -> Result<Snapshot> {
    let snapshot = Snapshot::load(env_file)?;
    debug!(vars = snapshot.len(), "snapshot taken");
    Ok(snapshot)
}

/// The registry from `./autenv.toml`, if one exists.
pub fn registry() -> Result<Option<Registry>> {
    let path = Config::config_path();
    if !path.is_file() {
        return Ok(None);
    }
    let config = Config::load(&path)?;
    Ok(Some(Registry::from_config(&config)))
}

/// A resolver over `snapshot`, honoring the registry's default environment.
///
/// The registry is only read when the environment is not already decided by
/// `explicit` (an `--env` flag) or by `ENVIRONMENT` / `NODE_ENV`.
pub fn resolver<'a>(snapshot: &'a Snapshot, explicit: Option<&str>) -> Result<Resolver<'a>> {
    if explicit.is_some() || snapshot.contains(ENVIRONMENT_VAR) || snapshot.contains(NODE_ENV_VAR)
    {
        debug!("environment already set, registry not consulted");
        return Ok(Resolver::new(snapshot));
    }

    Ok(match registry()? {
        Some(registry) => registry.resolver(snapshot),
        None => Resolver::new(snapshot),
    })
}
