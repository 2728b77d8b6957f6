//! Linefit CLI - Wrap label text to a width

mod cli;
mod styler;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let mut app = cli::LinefitApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
