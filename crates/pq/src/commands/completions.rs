//! Shell completions command implementation.
//!
//! Generate shell completions for bash, zsh, fish, and powershell.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell as ClapShell};

use crate::cli::{Cli, Shell};

/// Maps the CLI shell choice onto clap_complete's shell type.
fn to_clap_shell(shell: &Shell) -> ClapShell {
    match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::Powershell => ClapShell::PowerShell,
    }
}

/// Writes completions for `shell` to `out`.
fn write_completions(shell: &Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(to_clap_shell(shell), &mut cmd, "pq", out);
}

/// Generate shell completions for the given shell and write to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn execute(shell: &Shell) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(shell, &mut stdout);
    stdout.flush()
}
