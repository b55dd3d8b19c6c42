// ============================================================
// Layer 4 — Stratified Train/Test Splitter
// ============================================================
// Splits the labelled corpus into train and test sets *per
// label*, so every component keeps its share in both sets.
//
//   Step 1: Build the LabelSpace and map each label to its id
//   Step 2: Group records by label id
//   Step 3: Shuffle each group with a seeded RNG, then cut the
//           last round(test_fraction * n) records off as test
//   Step 4: Concatenate the groups in label-id order
//
// Per-group test size for a group of n records:
//   n < 2  → 0 (the whole group goes to train)
//   n ≥ 2  → round(test_fraction * n), clamped to [1, n - 1]
//
// So with test_fraction = 0.2:
//   10 × gfx → 8 train / 2 test
//    5 × ipc → 4 train / 1 test
//    1 × db  → 1 train / 0 test
//
// Shuffling uses ChaCha8 seeded from `seed`, with one stream per
// label id: the same (records, test_fraction, seed) always gives
// the same partition, and one group's order never depends on the
// size of another group.
//
// Reference: rand / rand_chacha crate documentation
//            Rust Book §8 (Vectors)

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::error::PipelineError;
use crate::domain::label_space::LabelSpace;
use crate::domain::record::{LabeledRecord, Record};

/// Default share of each label group assigned to test
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Default shuffle seed
pub const DEFAULT_SEED: u64 = 42;

/// Train and test sets plus the label mapping they were built with.
#[derive(Debug, Clone)]
pub struct SplitDatasets {
    pub label_space: LabelSpace,
    pub train:       Vec<LabeledRecord>,
    pub test:        Vec<LabeledRecord>,
}

/// Train/test sample counts for one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCount {
    pub label_id: usize,
    pub label:    String,
    pub train:    usize,
    pub test:     usize,
}

impl SplitDatasets {
    /// Number of distinct labels
    pub fn num_labels(&self) -> usize {
        self.label_space.num_labels()
    }

    /// Total records across both sets
    pub fn total(&self) -> usize {
        self.train.len() + self.test.len()
    }

    /// Per-label train/test counts in label-id order
    pub fn class_counts(&self) -> Vec<ClassCount> {
        let n = self.num_labels();
        let mut train = vec![0usize; n];
        let mut test  = vec![0usize; n];

        for r in &self.train {
            train[r.label] += 1;
        }
        for r in &self.test {
            test[r.label] += 1;
        }

        self.label_space
            .labels()
            .iter()
            .enumerate()
            .map(|(id, label)| ClassCount {
                label_id: id,
                label:    label.clone(),
                train:    train[id],
                test:     test[id],
            })
            .collect()
    }
}

/// Check that a test fraction lies strictly between 0 and 1.
pub fn validate_test_fraction(test_fraction: f64) -> Result<(), PipelineError> {
    if test_fraction > 0.0 && test_fraction < 1.0 {
        Ok(())
    } else {
        Err(PipelineError::InvalidTestFraction(test_fraction))
    }
}

/// Number of records of a group of `group_size` that go to test.
pub fn test_count(group_size: usize, test_fraction: f64) -> usize {
    if group_size < 2 {
        return 0;
    }
    let wanted = (test_fraction * group_size as f64).round() as usize;
    wanted.clamp(1, group_size - 1)
}

/// Split `records` into per-label stratified train and test sets.
///
/// # Errors
/// * `EmptyCorpus`         — `records` is empty
/// * `InvalidTestFraction` — `test_fraction` is not in (0, 1)
///
/// # Example
/// ```
/// use component_classifier::data::splitter::stratified_split;
/// use component_classifier::domain::record::Record;
///
/// let records: Vec<Record> = (0..10)
///     .map(|i| Record::new(format!("gfx file {i}"), "gfx"))
///     .collect();
/// let split = stratified_split(records, 0.2, 42).unwrap();
/// assert_eq!(split.train.len(), 8);
/// assert_eq!(split.test.len(), 2);
/// ```
pub fn stratified_split(
    records:       Vec<Record>,
    test_fraction: f64,
    seed:          u64,
) -> Result<SplitDatasets, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }
    validate_test_fraction(test_fraction)?;

    // ── Step 1: label space ───────────────────────────────────────────────────
    let label_space = LabelSpace::from_labels(records.iter().map(|r| r.label.as_str()))?;

    // ── Step 2: group by label id ─────────────────────────────────────────────
    let mut groups: Vec<Vec<LabeledRecord>> = vec![Vec::new(); label_space.num_labels()];
    for record in records {
        let id = label_space
            .id_of(&record.label)
            .ok_or(PipelineError::EmptyCorpus)?;
        groups[id].push(LabeledRecord::new(record.text, id));
    }

    // ── Step 3 + 4: shuffle, cut, concatenate in id order ─────────────────────
    let mut train = Vec::new();
    let mut test  = Vec::new();

    for (id, mut group) in groups.into_iter().enumerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(id as u64);
        group.shuffle(&mut rng);

        let n_test = test_count(group.len(), test_fraction);
        let held   = group.split_off(group.len() - n_test);

        tracing::debug!(
            label = label_space.label_of(id).unwrap_or_default(),
            train = group.len(),
            test = held.len(),
            "Split label group"
        );

        train.extend(group);
        test.extend(held);
    }

    tracing::info!(
        labels = label_space.num_labels(),
        train = train.len(),
        test = test.len(),
        "Stratified split complete"
    );

    Ok(SplitDatasets { label_space, train, test })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn corpus(groups: &[(&str, usize)]) -> Vec<Record> {
        groups
            .iter()
            .flat_map(|(label, n)| {
                (0..*n).map(move |i| Record::new(format!("{label} sample {i}"), *label))
            })
            .collect()
    }

    fn count(set: &[LabeledRecord], label: usize) -> usize {
        set.iter().filter(|r| r.label == label).count()
    }

    #[test]
    fn test_gfx_ipc_scenario() {
        let split = stratified_split(corpus(&[("gfx", 10), ("ipc", 5)]), 0.2, 42).unwrap();
        let gfx = split.label_space.id_of("gfx").unwrap();
        let ipc = split.label_space.id_of("ipc").unwrap();

        assert_eq!(split.train.len(), 12);
        assert_eq!(split.test.len(), 3);
        assert_eq!(count(&split.train, gfx), 8);
        assert_eq!(count(&split.train, ipc), 4);
        assert_eq!(count(&split.test, gfx), 2);
        assert_eq!(count(&split.test, ipc), 1);
    }

    #[test]
    fn test_single_sample_label_goes_to_train() {
        let split = stratified_split(corpus(&[("db", 1)]), 0.2, 7).unwrap();
        assert_eq!(split.train.len(), 1);
        assert!(split.test.is_empty());
        assert_eq!(split.num_labels(), 1);
    }

    #[test]
    fn test_two_samples_split_one_one() {
        let split = stratified_split(corpus(&[("intl", 2)]), 0.2, 1).unwrap();
        assert_eq!(split.train.len(), 1);
        assert_eq!(split.test.len(), 1);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let err = stratified_split(Vec::new(), 0.2, 42).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCorpus));
    }

    #[test]
    fn test_empty_corpus_reported_before_fraction_check() {
        let err = stratified_split(Vec::new(), 2.0, 42).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCorpus));
    }

    #[test]
    fn test_invalid_fraction_is_an_error() {
        for f in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = stratified_split(corpus(&[("gfx", 3)]), f, 42).unwrap_err();
            assert!(matches!(err, PipelineError::InvalidTestFraction(_)));
        }
    }

    #[test]
    fn test_concatenation_follows_label_id_order() {
        let split = stratified_split(corpus(&[("ipc", 6), ("browser", 6), ("gfx", 6)]), 0.5, 3)
            .unwrap();
        let train_ids: Vec<usize> = split.train.iter().map(|r| r.label).collect();
        let mut sorted = train_ids.clone();
        sorted.sort();
        assert_eq!(train_ids, sorted);
    }

    #[test]
    fn test_different_seeds_change_the_partition() {
        let records = corpus(&[("content", 40)]);
        let a = stratified_split(records.clone(), 0.2, 1).unwrap();
        let b = stratified_split(records, 0.2, 2).unwrap();
        assert_ne!(a.test, b.test);
    }

    #[test]
    fn test_group_partition_independent_of_other_groups() {
        let small = stratified_split(corpus(&[("gfx", 10)]), 0.2, 9).unwrap();
        let large = stratified_split(corpus(&[("gfx", 10), ("ipc", 30)]), 0.2, 9).unwrap();
        let gfx_test: Vec<_> = large.test.iter().filter(|r| r.label == 0).cloned().collect();
        assert_eq!(small.test, gfx_test);
    }

    #[test]
    fn test_class_counts() {
        let split = stratified_split(corpus(&[("gfx", 10), ("ipc", 5), ("db", 1)]), 0.2, 42)
            .unwrap();
        let counts = split.class_counts();
        assert_eq!(
            counts,
            vec![
                ClassCount { label_id: 0, label: "db".into(),  train: 1, test: 0 },
                ClassCount { label_id: 1, label: "gfx".into(), train: 8, test: 2 },
                ClassCount { label_id: 2, label: "ipc".into(), train: 4, test: 1 },
            ]
        );
        assert_eq!(split.total(), 16);
    }

    #[test]
    fn test_test_count_rounding() {
        assert_eq!(test_count(0, 0.2), 0);
        assert_eq!(test_count(1, 0.2), 0);
        assert_eq!(test_count(2, 0.2), 1);
        assert_eq!(test_count(3, 0.2), 1);
        assert_eq!(test_count(5, 0.2), 1);
        assert_eq!(test_count(10, 0.2), 2);
        assert_eq!(test_count(13, 0.2), 3);
        assert_eq!(test_count(4, 0.9), 3);
    }

    proptest! {
        #[test]
        fn prop_split_conserves_and_stratifies(
            sizes in prop::collection::vec(1usize..30, 1..6),
            fraction in 0.05f64..0.95,
            seed in any::<u64>(),
        ) {
            let names: Vec<String> = (0..sizes.len()).map(|i| format!("label{i}")).collect();
            let groups: Vec<(&str, usize)> = names
                .iter()
                .map(String::as_str)
                .zip(sizes.iter().copied())
                .collect();
            let records = corpus(&groups);
            let total = records.len();

            let split = stratified_split(records.clone(), fraction, seed).unwrap();
            prop_assert_eq!(split.train.len() + split.test.len(), total);

            let train_labels: HashSet<usize> = split.train.iter().map(|r| r.label).collect();
            let test_labels:  HashSet<usize> = split.test.iter().map(|r| r.label).collect();
            for (name, n) in &groups {
                let id = split.label_space.id_of(name).unwrap();
                prop_assert!(train_labels.contains(&id));
                if *n >= 2 {
                    prop_assert!(test_labels.contains(&id));
                }
            }

            let again = stratified_split(records, fraction, seed).unwrap();
            prop_assert_eq!(&split.train, &again.train);
            prop_assert_eq!(&split.test, &again.test);
        }
    }
}
