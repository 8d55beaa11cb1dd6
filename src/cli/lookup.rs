//! Resolution commands: env, url, creds, db.

use std::path::Path;

use serde::Serialize;

use crate::cli::{context, output};
use crate::core::Resolver;
use crate::error::Result;

/// Print the current environment name.
pub fn env(env_file: Option<&Path>) -> Result<()> {
    let snapshot = context::snapshot(env_file)?;
    let resolver = context::resolver(&snapshot, None)?;
    println!("{}", resolver.current_environment());
    Ok(())
}

/// Print the URL of an AUT.
pub fn url(env_file: Option<&Path>, aut: &str, env: Option<&str>) -> Result<()> {
    let snapshot = context::snapshot(env_file)?;
    let resolver = context::resolver(&snapshot, env)?;
    println!("{}", resolver.aut_url(aut, env)?);
    Ok(())
}

#[derive(Serialize)]
struct CredentialView<'a> {
    aut: &'a str,
    environment: &'a str,
    username: &'a str,
    password: &'a str,
}

/// Show resolved credentials for an AUT.
pub fn creds(
    env_file: Option<&Path>,
    aut: &str,
    env: Option<&str>,
    show_password: bool,
    json: bool,
) -> Result<()> {
    let snapshot = context::snapshot(env_file)?;
    let resolver = context::resolver(&snapshot, env)?;

    let environment = env
        .map(str::to_string)
        .unwrap_or_else(|| resolver.current_environment());
    let cred = resolver.aut_credentials(aut, Some(&environment))?;
    let password = if show_password {
        cred.password.as_str()
    } else {
        output::MASK
    };

    if json {
        let view = CredentialView {
            aut,
            environment: &environment,
            username: &cred.username,
            password,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    output::header(&format!("{}/{}", aut, environment));
    output::kv("username", &cred.username);
    output::kv("password", password);
    Ok(())
}

#[derive(Serialize)]
struct DatabaseView<'a> {
    db_type: &'a str,
    username: &'a str,
    password: &'a str,
    connect_string: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pool: Option<PoolView>,
}

#[derive(Serialize)]
struct PoolView {
    min: u32,
    max: u32,
    increment: u32,
    timeout: u32,
}

/// Show resolved database configuration.
pub fn db(
    env_file: Option<&Path>,
    db_type: &str,
    pool: bool,
    show_password: bool,
    json: bool,
) -> Result<()> {
    let snapshot = context::snapshot(env_file)?;
    // Database variables are not environment-scoped
    let resolver = Resolver::new(&snapshot);

    let (database, pool) = if pool {
        let config = resolver.database_pool_config(db_type)?;
        let view = PoolView {
            min: config.pool_min,
            max: config.pool_max,
            increment: config.pool_increment,
            timeout: config.pool_timeout,
        };
        (config.database, Some(view))
    } else {
        (resolver.database_config(db_type)?, None)
    };

    let password = if show_password {
        database.password.as_str()
    } else {
        output::MASK
    };

    if json {
        let view = DatabaseView {
            db_type,
            username: &database.username,
            password,
            connect_string: &database.connect_string,
            pool,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    output::header(db_type);
    output::kv("username", &database.username);
    output::kv("password", password);
    output::kv("connect ", &database.connect_string);
    if let Some(p) = pool {
        output::kv("pool    ", format!("min {} / max {} / +{}", p.min, p.max, p.increment));
        output::kv("timeout ", format!("{}s", p.timeout));
    }
    Ok(())
}
