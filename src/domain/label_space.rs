// ============================================================
// Layer 3 — LabelSpace
// ============================================================
// Bidirectional mapping between label strings (directory names)
// and dense integer ids in [0, num_labels).
//
// Ids are assigned in lexicographic order of the label strings,
// so the same corpus always produces the same mapping:
//
//   {"ipc", "gfx", "browser"}  →  browser=0, gfx=1, ipc=2
//
// The mapping is exported as label_map.json next to the datasets
// (see infra::exporter) so downstream consumers can translate
// predicted ids back to component names.
//
// Reference: Rust Book §8 (Collections — HashMap, Vec)

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::error::PipelineError;

/// Dense label ⇄ id mapping built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpace {
    /// Index = label id, value = label string
    labels: Vec<String>,

    /// Reverse lookup: label string → label id
    index: HashMap<String, usize>,
}

impl LabelSpace {
    /// Build a LabelSpace from every label observed in the corpus.
    /// Duplicates are collapsed; returns EmptyCorpus if no label is seen.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // BTreeSet both deduplicates and sorts
        let distinct: BTreeSet<String> = labels
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect();

        if distinct.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }

        let labels: Vec<String> = distinct.into_iter().collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();

        Ok(Self { labels, index })
    }

    /// Number of distinct labels (the classifier's output size)
    pub fn num_labels(&self) -> usize {
        self.labels.len()
    }

    /// Look up the id of a label string
    pub fn id_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Look up the label string for an id
    pub fn label_of(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// All labels in id order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// id → label map, the shape written to label_map.json
    pub fn id_to_label(&self) -> BTreeMap<usize, String> {
        self.labels.iter().cloned().enumerate().collect()
    }

    /// Rebuild a LabelSpace from an exported id → label map.
    /// Ids must be exactly 0..n with no gaps.
    pub fn from_id_map(map: BTreeMap<usize, String>) -> Result<Self, PipelineError> {
        if map.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }
        for (expected, id) in map.keys().enumerate() {
            if *id != expected {
                return Err(PipelineError::InvalidLabelMap(format!(
                    "label ids must be dense, found id {id} at position {expected}"
                )));
            }
        }

        let labels: Vec<String> = map.into_values().collect();
        let mut index = HashMap::with_capacity(labels.len());
        for (id, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), id).is_some() {
                return Err(PipelineError::InvalidLabelMap(format!(
                    "label '{label}' appears more than once"
                )));
            }
        }

        Ok(Self { labels, index })
    }
}
