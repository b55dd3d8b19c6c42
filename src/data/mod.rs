// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer turns a directory tree of C/C++ sources into
// labelled, stratified train/test datasets.
//
// The pipeline flows in this order:
//
//   source tree (target/<component>/...)
//       │
//       ▼
//   CorpusLoader          → walks the tree, reads matching files
//       │
//       ▼
//   Preprocessor          → lowercases, strips punctuation/digits
//       │
//       ▼
//   stratified_split      → label ids + per-label 80/20 split
//       │
//       ▼
//   ClassificationDataset → implements Burn's Dataset trait
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §13 (Iterators and Closures)

/// Walks a directory tree and builds labelled records
pub mod loader;

/// Normalises raw source text
pub mod preprocessor;

/// Per-label train/test splitting
pub mod splitter;

/// Implements Burn's Dataset trait for labelled samples
pub mod dataset;
