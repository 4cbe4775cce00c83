use std::path::Path;

use clap::Parser;
use color_eyre::{eyre::Context, Result};
use env_logger::Target;
use spm_gen::{
    cli::input::CliArgs,
    utils::logger::config_logger,
    worker::{run_generator, Outcome},
};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stderr)?;

    log::debug!("Launching a new spm-gen run");
    let outcome = run_generator(&cli_args, Path::new("."))
        .with_context(|| "Failed to generate the package manifest")?;

    if let Outcome::Printed(manifest) = outcome {
        print!("{manifest}");
    }

    Ok(())
}
