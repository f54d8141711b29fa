use std::io;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::Shell;
use expense_tracker::config::Settings;
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record, list, update and delete expenses from an interactive \
                  text menu. Everything is kept in memory and discarded when \
                  the program exits."
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = cli.settings;
    settings.validate()?;
    init_tracing(&settings);

    tracing::debug!(level = %settings.log_level, format = ?settings.log_format, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
