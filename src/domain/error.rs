// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// Typed failures of the corpus pipeline. The application and
// CLI layers wrap these in anyhow with extra context; tests
// match on the variants directly.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;

use thiserror::Error;

/// Fail-fast errors of the loader and splitter.
///
/// Unreadable individual files are *not* errors: they are
/// reported through `data::loader::ReadFailure` and the file
/// continues as an empty-text record.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No matching files were found, so there is nothing to split
    #[error("corpus is empty: no records to assign labels to")]
    EmptyCorpus,

    /// The configured corpus root does not exist
    #[error("corpus root not found: '{}'", .0.display())]
    RootNotFound(PathBuf),

    /// test_fraction outside the open interval (0, 1)
    #[error("test fraction must be in (0, 1), got {0}")]
    InvalidTestFraction(f64),

    /// No file extensions configured, nothing could ever match
    #[error("at least one file extension must be configured")]
    NoExtensions,

    /// An exported label map could not be turned back into a LabelSpace
    #[error("invalid label map: {0}")]
    InvalidLabelMap(String),
}
