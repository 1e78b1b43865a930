//! Digit run extraction.

/// Extract the maximal contiguous runs of decimal digits from `s`.
///
/// Non-digit characters act strictly as separators: consecutive separators
/// produce no empty entries, and runs come back in left-to-right order. A
/// string without digits yields an empty vector; an all-digit string yields
/// a single run spanning the whole input. Only ASCII `0`-`9` count as
/// digits.
///
/// # Arguments
/// * `s` - Input string, any mix of digits and other characters
///
/// # Returns
/// Borrowed substrings of `s`, each non-empty and all-digit.
#[must_use]
pub fn extract_digit_runs(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_ascii_digit()).filter(|run| !run.is_empty()).collect()
}
