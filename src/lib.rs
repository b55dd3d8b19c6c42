//! Builds labelled, stratified train/test datasets from C/C++ source
//! trees, one label per component directory.
//!
//! Layers:
//!   1. `cli`         — clap commands
//!   2. `application` — use cases (prepare, stats)
//!   3. `domain`      — records, label space, errors, traits
//!   4. `data`        — loader, preprocessor, splitter, Burn dataset
//!   5. `infra`       — dataset export and split reports

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

pub use application::prepare_use_case::{PipelineConfig, PrepareUseCase};
pub use data::loader::{CorpusLoader, LoadOutcome, ReadFailure};
pub use data::preprocessor::preprocess_text;
pub use data::splitter::{stratified_split, SplitDatasets};
pub use domain::error::PipelineError;
pub use domain::label_space::LabelSpace;
pub use domain::record::{LabeledRecord, Record};
