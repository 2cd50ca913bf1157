use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "./outputs";

#[derive(Parser, Debug)]
#[command(name = "qrmatrix", version, about = "QR code fixture matrix harness")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUT_DIR,
        help = "Directory receiving the generated artifacts"
    )]
    pub out_dir: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Load test vectors from a JSON catalog file instead of the builtin set"
    )]
    pub catalog: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand the matrix, encode every task and report outcomes.
    Run {
        #[arg(long, help = "Bound the worker pool (default: one worker per core)")]
        jobs: Option<usize>,
        #[arg(
            long,
            default_value_t = false,
            help = "Exit non-zero when any task failed"
        )]
        strict: bool,
    },
    /// Print the expansion without executing anything.
    Plan,
    /// List the catalog's test vectors.
    Vectors,
}
