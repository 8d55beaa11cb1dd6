//! Command-line interface.

pub mod check;
pub mod completions;
pub mod context;
pub mod lookup;
pub mod output;
pub mod secret;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// autenv - Environment-scoped credentials for UI test suites.
#[derive(Parser)]
#[command(
    name = "autenv",
    about = "Environment-scoped credentials and encrypted secrets for UI test suites",
    version
)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load variables from this .env file (default: ./.env when present)
    #[arg(long, global = true, value_name = "PATH", env = "AUTENV_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a secret for storage in an env file
    Encrypt {
        /// Value to protect (e.g., a login password)
        plaintext: Option<String>,
        /// Passphrase later supplied as DECRYPT_SECRET
        secret: Option<String>,
    },

    /// Decrypt an iv:ciphertext value
    Decrypt {
        /// Encrypted value
        value: String,
        /// Passphrase (defaults to DECRYPT_SECRET)
        #[arg(long)]
        secret: Option<String>,
    },

    /// Print the current environment name
    Env,

    /// Print the URL of an application under test
    Url {
        /// Application name (e.g., tyro)
        aut: String,
        /// Environment (defaults to the current environment)
        #[arg(short, long)]
        env: Option<String>,
    },

    /// Show resolved credentials for an application under test
    Creds {
        /// Application name (e.g., tyro)
        aut: String,
        /// Environment (defaults to the current environment)
        #[arg(short, long)]
        env: Option<String>,
        /// Print the decrypted password instead of a mask
        #[arg(long)]
        show_password: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved database configuration
    Db {
        /// Database type (e.g., oracle)
        #[arg(default_value = "oracle")]
        db_type: String,
        /// Include connection pool settings
        #[arg(long)]
        pool: bool,
        /// Print the decrypted password instead of a mask
        #[arg(long)]
        show_password: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every application/environment pair in autenv.toml
    Check {
        /// Registry file
        #[arg(long, default_value = "autenv.toml")]
        config: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    use Command::*;

    let env_file = cli.env_file.as_deref();

    match cli.command {
        Encrypt { plaintext, secret } => secret::encrypt(plaintext, secret),
        Decrypt { value, secret } => secret::decrypt(env_file, &value, secret),
        Env => lookup::env(env_file),
        Url { aut, env } => lookup::url(env_file, &aut, env.as_deref()),
        Creds {
            aut,
            env,
            show_password,
            json,
        } => lookup::creds(env_file, &aut, env.as_deref(), show_password, json),
        Db {
            db_type,
            pool,
            show_password,
            json,
        } => lookup::db(env_file, &db_type, pool, show_password, json),
        Check { config } => check::execute(env_file, &config),
        Completions { shell } => completions::execute(shell),
    }
}
