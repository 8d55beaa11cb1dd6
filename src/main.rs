//! autenv - Environment-scoped credentials for UI test suites.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use autenv::cli::output;
use autenv::cli::{execute, Cli};
use autenv::core::constants::LOG_VAR;
use autenv::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("autenv=debug")
        } else {
            EnvFilter::new("autenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::MissingSecret { .. }) => {
                Some("export DECRYPT_SECRET with the passphrase used by `autenv encrypt`")
            }
            Error::Config(ConfigError::Decryption { .. }) => {
                Some("re-encrypt with: autenv encrypt <password> <secret>")
            }
            Error::Config(ConfigError::NotFound(path)) if path.ends_with("autenv.toml") => {
                Some("declare [[target]] entries with aut and environments in autenv.toml")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
