// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `stats`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::prepare_use_case::PipelineConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a source tree, split it per component and export train/test datasets
    Prepare(PrepareArgs),

    /// Print the number of source files per component
    Stats(StatsArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Root directory with one sub-directory per component
    #[arg(long, default_value = "target")]
    pub root: PathBuf,

    /// File name suffixes to include, comma separated (e.g. .cpp,.h for Mozilla)
    #[arg(long, value_delimiter = ',', default_values_t = [".cc".to_string(), ".h".to_string()])]
    pub extensions: Vec<String>,

    /// Share of each component held out for testing, in (0, 1)
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Shuffle seed; the same seed reproduces the same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Directory for train.jsonl, test.jsonl, label_map.json and reports
    #[arg(long, default_value = "prepared")]
    pub output_dir: PathBuf,

    /// Read the whole pipeline configuration from a JSON file instead
    #[arg(
        long,
        conflicts_with_all = ["root", "extensions", "test_fraction", "seed", "output_dir"]
    )]
    pub config: Option<PathBuf>,
}

/// Convert CLI PrepareArgs into the application-layer PipelineConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PipelineConfig {
    fn from(a: PrepareArgs) -> Self {
        PipelineConfig {
            root_path:     a.root,
            extensions:    a.extensions,
            test_fraction: a.test_fraction,
            seed:          a.seed,
            output_dir:    a.output_dir,
        }
    }
}

/// All arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Root directory with one sub-directory per component
    #[arg(long, default_value = "target")]
    pub root: PathBuf,

    /// File name suffixes to include, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [".cc".to_string(), ".h".to_string()])]
    pub extensions: Vec<String>,
}
