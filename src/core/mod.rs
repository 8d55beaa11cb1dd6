//! Core library components.
//!
//! Secret encryption, environment snapshots and configuration resolution.
//! Nothing here touches the terminal; the CLI is a thin layer on top.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod registry;
pub mod resolver;
pub mod snapshot;

pub use resolver::Resolver;
pub use snapshot::Snapshot;
