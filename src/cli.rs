// src/cli.rs
use std::env;

use color_eyre::eyre::{self, WrapErr};
use tracing::Level;

use crate::config::Options;

const USAGE: &str = "Usage: make_class_list

Reads the roster page and the tutorial assignment CSV from the current
directory and writes one page per tutorial group. Takes no arguments.";

/// Process entry: install the report handler and logger, then run with the
/// fixed paths. Any argument is a usage error.
pub fn run() -> eyre::Result<()> {
    color_eyre::install()?;
    init_logging();

    if let Some(arg) = env::args().nth(1) {
        if arg == "-h" || arg == "--help" {
            println!("{USAGE}");
            std::process::exit(0);
        }
        eprintln!("Unknown arg: {arg}\n\n{USAGE}");
        std::process::exit(2);
    }

    let opts = Options::default();
    crate::runner::run(&opts, None)
        .wrap_err("could not generate tutorial group pages")?;
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
