//! Divisibility filtering over enumerated candidates.

use std::collections::BTreeSet;

use crate::{enumerate_combinations, extract_digit_runs};

/// Filter candidate digit strings by divisibility against `x`.
///
/// A candidate's integer value is kept iff it is divisible by `x` and the
/// decimal text of `x` does not occur inside the candidate's original text,
/// leading zeros intact. Values are de-duplicated numerically, so `"04"`
/// and `"4"` collapse to a single `4`, and returned sorted ascending.
///
/// A non-positive `x` yields an empty vector by contract. A candidate whose
/// value exceeds `u64::MAX` (20 or more digits) is skipped.
///
/// # Arguments
/// * `candidates` - Digit strings, typically from [`enumerate_combinations`]
/// * `x` - Divisor
///
/// # Returns
/// Distinct kept values, ascending.
#[must_use]
pub fn filter_divisible<'a, I>(candidates: I, x: i64) -> Vec<u64>
where
    I: IntoIterator<Item = &'a str>,
{
    if x <= 0 {
        return Vec::new();
    }
    let divisor = x as u64;
    let text = x.to_string();

    let mut kept = BTreeSet::new();
    for candidate in candidates {
        // Parsing only fails on over-long runs; the contract guarantees
        // all-digit input.
        let Ok(value) = candidate.parse::<u64>() else {
            continue;
        };
        if value % divisor == 0 && !candidate.contains(&text) {
            kept.insert(value);
        }
    }
    kept.into_iter().collect()
}

/// Find every distinct digit combination of `s` divisible by `x`.
///
/// Splits `s` into its maximal digit runs, enumerates all contiguous
/// combinations of each run in order, and filters them with
/// [`filter_divisible`]: divisible by `x`, not containing the decimal text
/// of `x`, de-duplicated by value, sorted ascending. Total over all inputs;
/// `x <= 0` short-circuits to an empty result.
///
/// ```
/// use basket_digits::divisible;
///
/// assert_eq!(divisible("hello4567hi123", 2), vec![4, 6, 56, 456]);
/// assert!(divisible("100", 0).is_empty());
/// ```
#[must_use]
pub fn divisible(s: &str, x: i64) -> Vec<u64> {
    if x <= 0 {
        return Vec::new();
    }
    let runs = extract_digit_runs(s);
    filter_divisible(runs.iter().copied().flat_map(enumerate_combinations), x)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("hello4567hi123", 2, vec![4, 6, 56, 456])]
    #[case("248", 2, vec![4, 8, 48])]
    #[case("abc", 5, vec![])]
    #[case("", 3, vec![])]
    #[case("9", 9, vec![])]
    #[case("100", 0, vec![])]
    #[case("100", -7, vec![])]
    fn divisible_scenarios(#[case] s: &str, #[case] x: i64, #[case] expected: Vec<u64>) {
        assert_eq!(divisible(s, x), expected);
    }

    #[test]
    fn dedupes_by_value_across_runs() {
        // "4" appears in both runs and "04" collapses onto 4 as well.
        assert_eq!(divisible("4a04", 2), vec![0, 4]);
    }

    #[test]
    fn containment_checked_against_original_text() {
        // "04" parses to 4, but its text is what the divisor is matched
        // against; only the bare "0" candidate survives.
        assert_eq!(divisible("a04", 4), vec![0]);
    }

    #[test]
    fn multi_digit_divisor_text() {
        // 12 divides 120 and 12; both contain "12" and are excluded.
        assert_eq!(divisible("120", 12), vec![0]);
    }

    #[test]
    fn divisor_one_keeps_everything_without_ones() {
        assert_eq!(divisible("23", 1), vec![2, 3, 23]);
    }

    #[test]
    fn results_sorted_distinct_and_divisible() {
        let result = divisible("9081726354x5566", 3);
        assert!(!result.is_empty());
        assert!(result.windows(2).all(|w| w[0] < w[1]));
        assert!(result.iter().all(|v| v % 3 == 0));
        assert!(result.iter().all(|v| !v.to_string().contains('3')));
    }

    #[test]
    fn results_trace_back_to_input_digits() {
        let s = "round 084 trip 4420 end 77";
        for v in divisible(s, 2) {
            assert!(s.contains(&v.to_string()));
        }
    }

    #[test]
    fn oversized_candidates_are_skipped() {
        // The 20-digit candidate overflows u64 and is dropped; every
        // shorter all-nines value is divisible by 3 and survives.
        let run = "9".repeat(20);
        let result = divisible(&run, 3);
        assert_eq!(result.len(), 19);
        assert_eq!(result[0], 9);
        assert_eq!(result[18], 9_999_999_999_999_999_999);
    }

    #[test]
    fn filter_accepts_any_candidate_source() {
        // "15" and "015" are divisible but carry the divisor's digit.
        let candidates = ["10", "15", "20", "015"];
        assert_eq!(filter_divisible(candidates, 5), vec![10, 20]);
    }
}
