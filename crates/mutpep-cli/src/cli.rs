use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "mutpep contributors",
    version,
    about = "mutpep - Generate mutant tryptic peptides from a reference protein database and a list of point mutations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply mutations to the reference database and write the peptide artifacts.
    Process(ProcessArgs),
    /// List the amino acid codes accepted in mutation records.
    Codes,
}

/// Arguments for the `process` subcommand.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    // --- Inputs ---
    /// Reference protein database in FASTA format (optionally gzip-compressed).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub reference: PathBuf,

    #[command(flatten)]
    pub mutations: MutationSource,

    // --- Outputs ---
    /// Directory for the output artifacts, overriding `output.directory`.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Digestion Overrides ---
    /// Override the shortest fragment that can carry a mutation.
    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,

    /// Override the longest fragment that can carry a mutation.
    #[arg(long, value_name = "INT")]
    pub max_length: Option<usize>,

    /// Number of lines of each artifact to print after the run (0 disables the preview).
    #[arg(long, value_name = "INT")]
    pub preview: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S digestion.stop-min-length=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Where mutation records are read from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct MutationSource {
    /// File of mutation records (.txt, .fasta, .csv or .tsv), or '-' for standard input.
    #[arg(short, long, value_name = "PATH")]
    pub mutations: Option<PathBuf>,

    /// Mutation records given directly on the command line, one per line.
    #[arg(long, value_name = "TEXT")]
    pub mutation_text: Option<String>,
}
