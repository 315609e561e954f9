//! Verity CLI binary.

use std::process;

use clap::Parser;
use verity::cli::args::VerityArgs;
use verity::cli::commands::execute_command;

fn main() {
    // Parse command line arguments using clap
    let args = VerityArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
