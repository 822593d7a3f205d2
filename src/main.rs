//! CLI entry point for the daily puzzle engine

use clap::Parser;
use daysquare::io::cli::{App, Cli};

fn main() -> daysquare::Result<()> {
    let cli = Cli::parse();
    App::new(cli).run()
}
