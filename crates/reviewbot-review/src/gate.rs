//! The short-code gate applied between extraction and review.
//!
//! Two comparisons are available, selected by [`CodeGate`]:
//!
//! - [`CodeGate::Literal`] compares the code *text* with the threshold after
//!   coercing it to a number, which is what the gate has always done. Only
//!   code that reads as a number (`42`, `0x10`, `-Infinity`) can be skipped;
//!   ordinary source text coerces to NaN and always passes.
//! - [`CodeGate::Length`] compares the character count with the threshold.

use reviewbot_core::{coerce_to_number, CodeGate, ReviewSettings};

/// Return `true` when the gate rejects `code` and the review should be
/// skipped.
///
/// # Examples
///
/// ```
/// use reviewbot_core::{CodeGate, ReviewSettings};
/// use reviewbot_review::gate::is_too_short;
///
/// let literal = ReviewSettings::default();
/// assert!(!is_too_short("const x = 1;", &literal));
/// assert!(is_too_short("42", &literal));
///
/// let length = ReviewSettings { code_gate: CodeGate::Length, ..ReviewSettings::default() };
/// assert!(is_too_short("const x = 1;", &length));
/// ```
pub fn is_too_short(code: &str, settings: &ReviewSettings) -> bool {
    let threshold = settings.min_code_length;
    match settings.code_gate {
        CodeGate::Literal => {
            coerce_to_number(code).is_some_and(|value| value <= threshold as f64)
        }
        CodeGate::Length => code.chars().count() <= threshold,
    }
}
