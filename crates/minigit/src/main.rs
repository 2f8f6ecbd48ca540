//! Minigit - menu-driven in-memory version control.
//!
//! This is the main entry point for the minigit CLI. All version-control
//! logic lives in `minigit-history`; this binary only parses flags, sets
//! up logging, and runs the interactive menu shell over stdin/stdout.

mod logging;
mod shell;

use clap::Parser;
use minigit_history::Repository;
use shell::Shell;
use tracing::info;

#[derive(Parser)]
#[command(name = "minigit")]
#[command(author, version, about = "Menu-driven in-memory version control", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the banner and menu (useful for piped input)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    info!("Starting minigit");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut shell = Shell::new(Repository::new(), cli.quiet);
    shell.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
