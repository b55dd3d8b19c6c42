// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The application layer programs against these traits rather
// than against concrete loaders, so a corpus can come from a
// directory tree today and from somewhere else later.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PipelineError;
use crate::domain::record::Record;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the labelled corpus.
///
/// Implementations:
///   - CorpusLoader → walks a directory tree of source files
///   - Vec<Record>  → an already materialised corpus (tests, reuse)
pub trait CorpusSource {
    /// Produce every record of the corpus.
    fn load_records(&self) -> Result<Vec<Record>, PipelineError>;
}

impl CorpusSource for Vec<Record> {
    fn load_records(&self) -> Result<Vec<Record>, PipelineError> {
        Ok(self.clone())
    }
}
