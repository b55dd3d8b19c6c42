// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises raw C/C++ source text before it becomes a record.
//
// Cleaning steps (applied in this exact order):
//   1. Lowercase the whole text
//   2. Delete every character that is not a word character or
//      whitespace (braces, operators, punctuation, underscores,
//      non-ASCII symbols)
//   3. Delete every run of digits
//   4. Collapse every run of whitespace into a single space
//   5. Trim leading/trailing whitespace
//
// Word characters are ASCII letters and digits, so the output
// alphabet is exactly [a-z ] with no leading, trailing or double
// spaces. The result is a fixed point: clean(clean(s)) == clean(s).
//
// Example:
//   "Foo_Bar() { return 42; }\n\n  x--; }"  →  "foobar return x"
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use once_cell::sync::Lazy;
use regex::Regex;

// Anything outside [a-z0-9] and whitespace; applied after lowercasing
static NON_WORD: Lazy<Regex> = Lazy::new(|| compile(r"[^a-z0-9\s]"));
static DIGITS: Lazy<Regex> = Lazy::new(|| compile(r"[0-9]+"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));

// Patterns are literals; a compile failure is a programming error
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static normalisation pattern must compile")
}

/// Stateless text normaliser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Normalise a raw source text.
    /// Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let words   = NON_WORD.replace_all(&lowered, "");
        let letters = DIGITS.replace_all(&words, "");
        let spaced  = WHITESPACE.replace_all(&letters, " ");
        spaced.trim().to_string()
    }
}

/// Free-function form of `Preprocessor::clean`.
pub fn preprocess_text(text: &str) -> String {
    Preprocessor.clean(text)
}
