// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Walks a directory tree and turns every matching source file
// into a Record:
//
//   target/
//     gfx/
//       layers/Compositor.cc   → Record { text, label: "layers" }
//       gfxFont.h              → Record { text, label: "gfx" }
//     ipc/
//       Channel.cc             → Record { text, label: "ipc" }
//
// The label is the name of the file's *immediate* parent
// directory, not its path relative to the root. Two directories
// with the same name at different depths share one label.
//
// A file matches when its name ends with one of the configured
// extensions (".cc", ".h" for Chromium; ".cpp", ".h" for Mozilla).
//
// Unreadable files do not abort the run: the failure is logged
// and recorded in LoadOutcome::failures, and the file still
// produces a record with empty text.
//
// Symlinked files are read through their target; symlinked
// directories are listed but not descended into. A dangling
// symlink counts as an unreadable file.
//
// Walk entries are sorted by file name so the record order is
// the same on every run.
//
// Reference: walkdir crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::data::preprocessor::Preprocessor;
use crate::domain::error::PipelineError;
use crate::domain::record::Record;
use crate::domain::traits::CorpusSource;

/// A file that matched but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub path:   PathBuf,
    pub reason: String,
}

/// Everything the loader produced in one pass.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// One record per matching file, in walk order
    pub records: Vec<Record>,

    /// Files that matched but failed to read; each also appears
    /// in `records` with empty text
    pub failures: Vec<ReadFailure>,
}

impl LoadOutcome {
    /// Fraction of matching files that could not be read
    pub fn failure_rate(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.failures.len() as f64 / self.records.len() as f64
    }
}

/// Loads labelled records from a directory tree.
/// Implements the CorpusSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    root:         PathBuf,
    extensions:   Vec<String>,
    preprocessor: Preprocessor,
}

impl CorpusLoader {
    /// Create a loader for `root` matching any of `extensions`.
    pub fn new<I, S>(root: impl Into<PathBuf>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root:         root.into(),
            extensions:   extensions.into_iter().map(Into::into).collect(),
            preprocessor: Preprocessor::new(),
        }
    }

    /// Returns true if the file name ends with a configured extension
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| self.extensions.iter().any(|ext| name.ends_with(ext.as_str())))
            .unwrap_or(false)
    }

    /// Walk the tree and build one record per matching file.
    pub fn load(&self) -> Result<LoadOutcome, PipelineError> {
        if self.extensions.is_empty() {
            return Err(PipelineError::NoExtensions);
        }
        if !self.root.exists() {
            return Err(PipelineError::RootNotFound(self.root.clone()));
        }

        let mut outcome = LoadOutcome::default();

        let walker = WalkDir::new(&self.root).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // An unreadable directory only hides its own subtree
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            // Symlinked files are read through; directories, including
            // symlinked ones, are never records
            if entry.file_type().is_dir()
                || entry.path().is_dir()
                || !self.matches(entry.path())
            {
                continue;
            }

            let path = entry.path();
            self.push_file(&mut outcome, path, read_source(path));
        }

        tracing::info!(
            root = %self.root.display(),
            records = outcome.records.len(),
            failures = outcome.failures.len(),
            "Corpus loaded"
        );
        Ok(outcome)
    }

    /// Turn one matching file's read result into a record. A failed
    /// read is logged, recorded in `failures` and kept as empty text.
    fn push_file(&self, outcome: &mut LoadOutcome, path: &Path, read: io::Result<String>) {
        let label = label_for(path);

        let text = match read {
            Ok(raw) => self.preprocessor.clean(&raw),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Cannot read file, using empty text"
                );
                outcome.failures.push(ReadFailure {
                    path:   path.to_path_buf(),
                    reason: e.to_string(),
                });
                String::new()
            }
        };

        tracing::debug!(
            path = %path.display(),
            label = %label,
            chars = text.len(),
            "Loaded source file"
        );
        outcome.records.push(Record::new(text, label));
    }
}

impl CorpusSource for CorpusLoader {
    fn load_records(&self) -> Result<Vec<Record>, PipelineError> {
        Ok(self.load()?.records)
    }
}

/// Read a file as text. Invalid UTF-8 is decoded lossily; the
/// replacement characters are later removed by the preprocessor.
fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Name of the immediate parent directory of `path`.
fn label_for(path: &Path) -> String {
    match path.parent() {
        Some(parent) => parent
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| parent.to_string_lossy().into_owned()),
        None => String::new(),
    }
}
