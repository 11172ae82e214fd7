// src/bin/cli.rs
use html_harvest::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
