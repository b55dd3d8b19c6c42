use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::splitter::SplitDatasets;
use crate::domain::record::LabeledRecord;

/// One labelled text sample as the classifier trainer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSample {
    pub text:  String,
    pub label: usize,
}

impl From<LabeledRecord> for ClassSample {
    fn from(r: LabeledRecord) -> Self {
        Self { text: r.text, label: r.label }
    }
}

pub struct ClassificationDataset {
    samples:    Vec<ClassSample>,
    num_labels: usize,
}

impl ClassificationDataset {
    pub fn new(records: Vec<LabeledRecord>, num_labels: usize) -> Self {
        Self {
            samples: records.into_iter().map(ClassSample::from).collect(),
            num_labels,
        }
    }

    /// Build the (train, test) pair from a finished split.
    pub fn from_split(split: SplitDatasets) -> (Self, Self) {
        let n = split.num_labels();
        (Self::new(split.train, n), Self::new(split.test, n))
    }

    pub fn num_labels(&self) -> usize { self.num_labels }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<ClassSample> for ClassificationDataset {
    fn get(&self, index: usize) -> Option<ClassSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::splitter::stratified_split;
    use crate::domain::record::Record;

    #[test]
    fn test_from_split_keeps_sizes_and_labels() {
        let records: Vec<Record> = (0..10)
            .map(|i| Record::new(format!("text {i}"), if i % 2 == 0 { "gfx" } else { "ipc" }))
            .collect();
        let split = stratified_split(records, 0.2, 42).unwrap();
        let (train_len, test_len) = (split.train.len(), split.test.len());

        let (train, test) = ClassificationDataset::from_split(split);
        assert_eq!(train.len(), train_len);
        assert_eq!(test.len(), test_len);
        assert_eq!(train.num_labels(), 2);
        assert!(train.iter().all(|s| s.label < 2));
    }

    #[test]
    fn test_get_out_of_range() {
        let ds = ClassificationDataset::new(vec![LabeledRecord::new("a", 0)], 1);
        assert_eq!(ds.get(0), Some(ClassSample { text: "a".into(), label: 0 }));
        assert_eq!(ds.get(1), None);
        assert_eq!(ds.sample_count(), 1);
    }
}
