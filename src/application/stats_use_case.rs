// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Loads the corpus and counts samples per label, largest first.
// Useful for spotting tiny components before splitting.

use anyhow::Result;
use std::collections::HashMap;

use crate::domain::traits::CorpusSource;

/// Sample count of one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

pub struct StatsUseCase<S: CorpusSource> {
    source: S,
}

impl<S: CorpusSource> StatsUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Per-label counts sorted by count (descending), then label.
    pub fn execute(&self) -> Result<Vec<LabelCount>> {
        let records = self.source.load_records()?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for r in records {
            *counts.entry(r.label).or_default() += 1;
        }

        let mut sorted: Vec<LabelCount> = counts
            .into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        tracing::info!(labels = sorted.len(), "Counted samples per label");
        Ok(sorted)
    }
}
