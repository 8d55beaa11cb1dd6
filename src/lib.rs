//! autenv - Environment-scoped credentials for UI test suites.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secret        # encrypt / decrypt
//! │   ├── lookup        # env, url, creds, db
//! │   ├── check         # validate autenv.toml against the environment
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # AES-256-CBC secret encryption
//!     ├── domain/       # EncryptedSecret, credentials, .env files
//!     ├── snapshot      # Frozen view of environment variables
//!     ├── resolver      # AUT/environment/database lookups
//!     ├── config        # autenv.toml management
//!     └── registry      # Declared AUT × environment pairs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use autenv::core::{Resolver, Snapshot};
//!
//! let snapshot = Snapshot::load(None)?;
//! let resolver = Resolver::new(&snapshot);
//! let url = resolver.aut_url("tyro", None)?;
//! let creds = resolver.aut_credentials("tyro", None)?;
//! # let _ = (url, creds);
//! # Ok::<(), autenv::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
