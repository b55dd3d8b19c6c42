// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, built on clap.
// All pipeline logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — load, split and export the datasets
//   2. `stats`   — count source files per component
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PrepareArgs, StatsArgs};

use crate::application::prepare_use_case::PipelineConfig;

#[derive(Parser, Debug)]
#[command(
    name = "component-classifier",
    version,
    about = "Build labelled, stratified train/test datasets from C/C++ source trees."
)]
pub struct Cli {
    /// The subcommand to run (prepare or stats)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Stats(args)   => run_stats(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    let config = match args.config.clone() {
        Some(path) => PipelineConfig::from_json_file(&path)?,
        None       => args.into(),
    };

    let output = PrepareUseCase::new(config).execute()?;

    println!("{}", output.report.render());
    if !output.read_failures.is_empty() {
        println!("{} file(s) could not be read:", output.read_failures.len());
        for f in &output.read_failures {
            println!("  {}: {}", f.path.display(), f.reason);
        }
    }
    let (train, test) = output.datasets();
    println!(
        "Prepared {} train / {} test records over {} labels in '{}'.",
        train.sample_count(),
        test.sample_count(),
        train.num_labels(),
        output.output_dir.display(),
    );
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    use crate::application::stats_use_case::StatsUseCase;
    use crate::data::loader::CorpusLoader;

    tracing::info!("Counting source files under: {}", args.root.display());

    let loader = CorpusLoader::new(&args.root, args.extensions);
    let counts = StatsUseCase::new(loader).execute()?;

    println!("Components sorted by the number of files:");
    for c in &counts {
        println!("{}: {} files", c.label, c.count);
    }
    Ok(())
}
