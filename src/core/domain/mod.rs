//! Domain types.

mod aut;
mod credential;
mod env;
mod secret;

pub use aut::{AutEnvironmentKey, AutVars};
pub use credential::{DatabaseConfig, PoolConfig, ResolvedCredential};
pub use env::EnvFile;
pub use secret::EncryptedSecret;
