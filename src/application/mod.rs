// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (preparing datasets or inspecting the corpus).
//
// Rules for this layer:
//   - No text processing or splitting logic here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Rust Book §7 (Module System)

// The load → split → export workflow
pub mod prepare_use_case;

// Per-label corpus statistics
pub mod stats_use_case;
