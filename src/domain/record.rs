// ============================================================
// Layer 3 — Record Domain Types
// ============================================================
// A Record is one source file after normalisation, tagged with
// the name of the directory it was found in.
//
// Two shapes exist:
//   Record        — label is still the raw directory name
//   LabeledRecord — label has been replaced by a dense integer id
//                   from the LabelSpace
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// One normalised source file and its raw directory label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Normalised file contents (see data::preprocessor)
    pub text: String,

    /// Name of the file's immediate parent directory, e.g. "gfx"
    pub label: String,
}

impl Record {
    /// Create a new Record.
    ///
    /// Example:
    ///   let rec = Record::new("class foo", "gfx");
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text:  text.into(),
            label: label.into(),
        }
    }
}

/// A Record whose label has been mapped to an integer id.
/// This is the row shape handed to the classifier trainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub text:  String,
    pub label: usize,
}

impl LabeledRecord {
    pub fn new(text: impl Into<String>, label: usize) -> Self {
        Self { text: text.into(), label }
    }
}
