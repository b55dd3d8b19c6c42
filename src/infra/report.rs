// ============================================================
// Layer 5 — Split Report
// ============================================================
// Records how many samples of each label ended up in train and
// test, both as a CSV file and as a printable table.
//
// Output file: prepared/split_report.csv
//
// Example CSV output:
//   label_id,label,train,test
//   0,browser,412,103
//   1,gfx,88,22
//   2,ipc,4,1
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::splitter::ClassCount;

pub const REPORT_FILE: &str = "split_report.csv";

/// Per-label train/test counts of one split.
#[derive(Debug, Clone)]
pub struct SplitReport {
    counts: Vec<ClassCount>,
}

impl SplitReport {
    pub fn new(counts: Vec<ClassCount>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[ClassCount] {
        &self.counts
    }

    /// Write the report as CSV into `dir`, returning the file path.
    pub fn write_csv(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(REPORT_FILE);
        let file = File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        writeln!(out, "label_id,label,train,test")?;
        for c in &self.counts {
            writeln!(out, "{},{},{},{}", c.label_id, csv_field(&c.label), c.train, c.test)?;
        }
        out.flush()?;

        tracing::debug!("Wrote split report: '{}'", path.display());
        Ok(path)
    }

    /// Human-readable per-label counts for the terminal.
    pub fn render(&self) -> String {
        let mut s = String::from("Number of training samples for each class:\n");
        for c in &self.counts {
            let _ = writeln!(s, "{}: {} samples", c.label, c.train);
        }
        s.push_str("\nNumber of testing samples for each class:\n");
        for c in self.counts.iter().filter(|c| c.test > 0) {
            let _ = writeln!(s, "{}: {} samples", c.label, c.test);
        }
        s
    }
}

/// Quote a CSV field if it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
