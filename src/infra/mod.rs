// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Everything that writes pipeline results to disk:
//
//   exporter.rs — JSON Lines datasets, label map and config
//                 for the downstream classifier trainer
//
//   report.rs   — per-label train/test counts as CSV and as
//                 a printable table
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Dataset, label map and config export
pub mod exporter;

/// Per-label split counts
pub mod report;
