//! Text case conversion.
//!
//! Uses the Unicode default case mapping, so results never depend on the
//! process locale. One-to-many mappings apply (`ß` becomes `SS`), which means
//! the output can be longer than the input.

/// Convert `input` to its uppercase form.
pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

/// Number of Unicode scalar values in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
