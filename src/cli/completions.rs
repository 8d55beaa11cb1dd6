//! Completions command.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

/// Write the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut stdout = std::io::stdout().lock();
    generate(shell, &mut cmd, name, &mut stdout);
    stdout.flush()?;
    Ok(())
}
