// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the corpus:
// what a record is, how labels map to ids, and how the pipeline
// can fail.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Labelled text records
pub mod record;

// Label string ⇄ integer id mapping
pub mod label_space;

// Typed pipeline failures
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
