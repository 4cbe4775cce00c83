use std::path::PathBuf;

use clap::Parser;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use spm_gen::cli::input::CliArgs;
///
/// let parser = CliArgs::parse_from(["", "-v"]);
/// assert_eq!(1, parser.verbose);
/// assert!(parser.target_names.is_empty());
///
/// let parser = CliArgs::parse_from([
///     "", "--project-path", "../Shop", "--project-name", "Shop", "--stdout", "App", "Widget",
/// ]);
/// assert_eq!(parser.project_path.as_deref(), Some("../Shop"));
/// assert_eq!(parser.project_name.as_deref(), Some("Shop"));
/// assert!(parser.stdout);
/// assert_eq!(parser.target_names, vec!["App", "Widget"]);
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "spm-gen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Generates a Package.swift manifest from the project graph of a tuist project",
    long_about = "Reads the project graph exported by tuist, keeps the requested targets and \
                  everything they depend on, and writes the equivalent Swift package manifest"
)]
pub struct CliArgs {
    #[arg(short, long, action = clap::ArgAction::Count, help = "spm-gen maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(
        long,
        help = "Root of the tuist project. Relative paths are resolved against the current directory"
    )]
    pub project_path: Option<String>,

    #[arg(
        long,
        help = "Name of the project to convert. Derived from the *.xcodeproj bundle at the root when missing"
    )]
    pub project_name: Option<String>,

    #[arg(
        long,
        help = "Reads a graph exported with `tuist graph --format json` instead of invoking tuist"
    )]
    pub graph: Option<PathBuf>,

    #[arg(long, help = "Configuration file. Defaults to spm-gen.toml at the project root")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Prints the manifest instead of writing the Package.swift file")]
    pub stdout: bool,

    #[arg(help = "Targets to keep, with everything they depend on. Keeps every target when empty")]
    pub target_names: Vec<String>,
}
