mod generate;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use index_script_gen::{GenError, TestKind};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "index-script-gen")]
#[command(version)]
#[command(about = "Generate randomized unique-index test scripts", long_about = None)]
pub struct Cli {
    /// Verbose logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write test blocks to stdout or a file
    Generate {
        /// Random seed for reproducibility (random if not specified)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of blocks to emit (runs until killed if not specified)
        #[arg(short, long)]
        blocks: Option<u64>,

        /// Candidate tuples per block before duplicates are removed
        #[arg(short, long)]
        tuples: Option<usize>,

        /// Test kinds to draw from (comma-separated or repeated): UniqueIntsHash,
        /// UniqueIntsTree, UniqueGenericHash, UniqueGenericTree
        #[arg(short, long, value_name = "KINDS", value_delimiter = ',')]
        kind: Vec<TestKind>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML config file; flags given on the command line take precedence
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show progress on stderr
        #[arg(short, long)]
        progress: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Install the stderr log subscriber. stdout is reserved for the script.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Exit status for internal misconfiguration, distinct from ordinary failures
pub const EXIT_INTERNAL: i32 = 2;

/// Message and exit status for a failed run.
///
/// Misconfiguration means the generator itself is broken, so it is reported
/// as an internal error rather than as a problem with the user's input.
pub fn report(err: &anyhow::Error) -> (String, i32) {
    match err.downcast_ref::<GenError>() {
        Some(gen_err) if gen_err.is_misconfiguration() => (
            format!("internal error (generator misconfigured): {err:#}"),
            EXIT_INTERNAL,
        ),
        _ => (format!("{err:#}"), 1),
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            seed,
            blocks,
            tuples,
            kind,
            output,
            config,
            progress,
        } => generate::run(seed, blocks, tuples, kind, output, config, progress),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "index-script-gen",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
