// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full dataset preparation pipeline in order:
//
//   Step 1: Validate the configuration
//   Step 2: Load and normalise source files  (Layer 4 - data)
//   Step 3: Stratified train/test split      (Layer 4 - data)
//   Step 4: Save config                      (Layer 5 - infra)
//   Step 5: Export datasets and label map    (Layer 5 - infra)
//   Step 6: Write the per-label split report (Layer 5 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::data::{
    dataset::ClassificationDataset,
    loader::{CorpusLoader, ReadFailure},
    splitter::{stratified_split, validate_test_fraction, SplitDatasets, DEFAULT_SEED,
               DEFAULT_TEST_FRACTION},
};
use crate::domain::{error::PipelineError, traits::CorpusSource};
use crate::infra::{exporter::DatasetExporter, report::SplitReport};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Every input the pipeline depends on. Serialisable so the exact
// configuration can be stored next to the datasets it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub root_path:     PathBuf,
    pub extensions:    Vec<String>,
    pub test_fraction: f64,
    pub seed:          u64,
    pub output_dir:    PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root_path:     PathBuf::from("target"),
            extensions:    vec![".cc".to_string(), ".h".to_string()],
            test_fraction: DEFAULT_TEST_FRACTION,
            seed:          DEFAULT_SEED,
            output_dir:    PathBuf::from("prepared"),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Missing fields take
    /// their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))
    }

    /// Reject configurations the pipeline can never run with.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.extensions.is_empty() {
            return Err(PipelineError::NoExtensions);
        }
        validate_test_fraction(self.test_fraction)
    }

    /// A loader configured for this corpus
    pub fn loader(&self) -> CorpusLoader {
        CorpusLoader::new(&self.root_path, self.extensions.iter().cloned())
    }
}

/// What one `prepare` run produced.
#[derive(Debug)]
pub struct PrepareOutput {
    pub split:         SplitDatasets,
    pub report:        SplitReport,
    pub read_failures: Vec<ReadFailure>,
    pub output_dir:    PathBuf,
}

impl PrepareOutput {
    /// The (train, test) Burn datasets handed to the classifier trainer.
    pub fn datasets(&self) -> (ClassificationDataset, ClassificationDataset) {
        ClassificationDataset::from_split(self.split.clone())
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PipelineConfig,
}

impl PrepareUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load a corpus from any source and split it.
    /// Nothing is written to disk.
    pub fn split_from(&self, source: &dyn CorpusSource) -> Result<SplitDatasets> {
        self.config.validate()?;
        let records = source.load_records()?;
        Ok(stratified_split(records, self.config.test_fraction, self.config.seed)?)
    }

    /// Execute the full pipeline end to end.
    pub fn execute(&self) -> Result<PrepareOutput> {
        let cfg = &self.config;

        // ── Step 1: Validate ──────────────────────────────────────────────────
        cfg.validate()?;

        // ── Step 2: Load the corpus ───────────────────────────────────────────
        tracing::info!(
            root = %cfg.root_path.display(),
            extensions = ?cfg.extensions,
            "Loading source files"
        );
        let outcome = cfg
            .loader()
            .load()
            .with_context(|| format!("Cannot load corpus from '{}'", cfg.root_path.display()))?;

        if !outcome.failures.is_empty() {
            tracing::warn!(
                failed = outcome.failures.len(),
                rate = outcome.failure_rate(),
                "Some files could not be read and were kept with empty text"
            );
        }

        // ── Step 3: Stratified split ──────────────────────────────────────────
        let split = stratified_split(outcome.records, cfg.test_fraction, cfg.seed)?;

        // ── Step 4 + 5: Export config, datasets, label map ────────────────────
        let exporter = DatasetExporter::new(&cfg.output_dir)?;
        exporter.save_config(cfg)?;
        exporter.save_split(&split)?;

        // ── Step 6: Split report ──────────────────────────────────────────────
        let report = SplitReport::new(split.class_counts());
        report.write_csv(exporter.dir())?;

        Ok(PrepareOutput {
            split,
            report,
            read_failures: outcome.failures,
            output_dir: cfg.output_dir.clone(),
        })
    }
}
