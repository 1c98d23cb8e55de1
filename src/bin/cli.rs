// src/bin/cli.rs
use make_class_list::cli;

fn main() -> color_eyre::eyre::Result<()> {
    cli::run()
}
