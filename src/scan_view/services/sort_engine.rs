use crate::scan_view::domain::{CanonicalRow, SortKey, SortOrder};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// SortEngine service ordering rows by one column
///
/// # Comparison policy
/// - `updates` compares the parsed instant; a missing timestamp counts as the
///   Unix epoch, so such rows sink under `desc` and rise under `asc`.
/// - Every other key is compared numerically after coercing the field to a
///   number the way a loose numeric cast would (`""` is 0, `"12"` is 12,
///   `"Semgrep"` is not a number). Any comparison involving a non-number is a
///   tie. Text columns such as `name` therefore keep their incoming order
///   unless their values happen to be numeric; they are not sorted
///   alphabetically.
///
/// Ties always keep their input order, in both directions. Because tie-on-NaN
/// is not a total order, rows are merged with a stable merge sort that only
/// moves a row ahead on a strict `Less`, instead of `slice::sort_by`, which may
/// panic on inconsistent comparators.
pub struct SortEngine;

impl SortEngine {
    pub fn sort(rows: &[CanonicalRow], key: SortKey, order: SortOrder) -> Vec<CanonicalRow> {
        let refs: Vec<&CanonicalRow> = rows.iter().collect();
        let mut compare = |a: &CanonicalRow, b: &CanonicalRow| order.apply(Self::compare(a, b, key));

        merge_sort(refs, &mut compare).into_iter().cloned().collect()
    }

    /// Ascending comparison of two rows on `key`
    pub fn compare(a: &CanonicalRow, b: &CanonicalRow, key: SortKey) -> Ordering {
        match key {
            SortKey::Updates => update_instant(a).cmp(&update_instant(b)),
            _ => {
                let left = numeric_value(a, key);
                let right = numeric_value(b, key);
                left.partial_cmp(&right).unwrap_or(Ordering::Equal)
            }
        }
    }
}

fn update_instant(row: &CanonicalRow) -> DateTime<Utc> {
    row.updates_raw.unwrap_or(DateTime::UNIX_EPOCH)
}

fn numeric_value(row: &CanonicalRow, key: SortKey) -> f64 {
    match key {
        SortKey::Vulnerabilities => row.vulnerabilities,
        SortKey::Name => coerce_to_number(&row.name),
        SortKey::SastTool => coerce_to_number(&row.sast_tool),
        SortKey::Rerun => coerce_to_number(row.rerun.as_str()),
        SortKey::Updates => f64::NAN,
    }
}

/// Loose numeric cast: blank text is 0, decimal literals and unsigned
/// `0x`/`0o`/`0b` literals parse, `Infinity` is infinite, the rest is NaN.
fn coerce_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = radix_literal(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf"/"nan" spellings; those are not numbers here.
    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// `Some` when `text` carries a radix prefix; NaN if the digits are invalid.
fn radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

fn merge_sort<'a, T, F>(items: Vec<&'a T>, compare: &mut F) -> Vec<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort(left, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if compare(r, l) == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_view::domain::RerunFlag;
    use chrono::TimeZone;

    fn row(name: &str, vulnerabilities: f64, updated_hour: Option<u32>) -> CanonicalRow {
        CanonicalRow {
            name: name.to_string(),
            vulnerabilities,
            updates: String::new(),
            updates_raw: updated_hour
                .map(|h| Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap()),
            sast_tool: "Semgrep".to_string(),
            rerun: RerunFlag::No,
            url: String::new(),
        }
    }

    fn names(rows: &[CanonicalRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_updates_desc_sinks_missing_timestamp() {
        let rows = vec![row("b", 1.0, None), row("a", 3.0, Some(10))];
        let sorted = SortEngine::sort(&rows, SortKey::Updates, SortOrder::Desc);
        assert_eq!(names(&sorted), vec!["a", "b"]);
    }

    #[test]
    fn test_updates_asc_raises_missing_timestamp() {
        let rows = vec![row("a", 3.0, Some(10)), row("b", 1.0, None), row("c", 0.0, Some(2))];
        let sorted = SortEngine::sort(&rows, SortKey::Updates, SortOrder::Asc);
        assert_eq!(names(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_updates_chronological_not_lexical() {
        let mut early = row("early", 0.0, None);
        early.updates_raw = Some(Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap());
        early.updates = "12/31/2023 23:00".to_string();
        let mut late = row("late", 0.0, None);
        late.updates_raw = Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
        late.updates = "01/02/2024 00:00".to_string();

        let sorted = SortEngine::sort(&[late, early], SortKey::Updates, SortOrder::Asc);
        assert_eq!(names(&sorted), vec!["early", "late"]);
    }

    #[test]
    fn test_vulnerabilities_numeric_both_directions() {
        let rows = vec![row("a", 3.0, None), row("b", 10.0, None), row("c", 1.0, None)];
        let desc = SortEngine::sort(&rows, SortKey::Vulnerabilities, SortOrder::Desc);
        assert_eq!(names(&desc), vec!["b", "a", "c"]);
        let asc = SortEngine::sort(&rows, SortKey::Vulnerabilities, SortOrder::Asc);
        assert_eq!(names(&asc), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_vulnerabilities_keep_fractional_and_negative_counts() {
        let rows = vec![
            row("x", 2.0, None),
            row("y", 2.4, None),
            row("neg", -3.0, None),
            row("zero", 0.0, None),
        ];
        let desc = SortEngine::sort(&rows, SortKey::Vulnerabilities, SortOrder::Desc);
        assert_eq!(names(&desc), vec!["y", "x", "zero", "neg"]);
        let asc = SortEngine::sort(&rows, SortKey::Vulnerabilities, SortOrder::Asc);
        assert_eq!(names(&asc), vec!["neg", "zero", "x", "y"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let rows = vec![
            row("first", 2.0, None),
            row("x", 5.0, None),
            row("second", 2.0, None),
            row("third", 2.0, None),
        ];

        let desc = SortEngine::sort(&rows, SortKey::Vulnerabilities, SortOrder::Desc);
        assert_eq!(names(&desc), vec!["x", "first", "second", "third"]);
        let asc = SortEngine::sort(&rows, SortKey::Vulnerabilities, SortOrder::Asc);
        assert_eq!(names(&asc), vec!["first", "second", "third", "x"]);
    }

    #[test]
    fn test_non_numeric_text_columns_are_ties() {
        let rows = vec![row("zeta", 0.0, None), row("alpha", 0.0, None), row("mu", 0.0, None)];
        for key in [SortKey::Name, SortKey::SastTool, SortKey::Rerun] {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let sorted = SortEngine::sort(&rows, key, order);
                assert_eq!(names(&sorted), vec!["zeta", "alpha", "mu"]);
            }
        }
    }

    #[test]
    fn test_numeric_names_are_ordered_numerically() {
        let rows = vec![row("10", 0.0, None), row("9", 0.0, None), row("100", 0.0, None)];
        let sorted = SortEngine::sort(&rows, SortKey::Name, SortOrder::Asc);
        assert_eq!(names(&sorted), vec!["9", "10", "100"]);
    }

    #[test]
    fn test_mixed_numeric_and_text_names_do_not_panic() {
        let rows: Vec<CanonicalRow> = ["3", "beta", "1", "alpha", "2", "", "gamma"]
            .iter()
            .map(|n| row(n, 0.0, None))
            .collect();
        let sorted = SortEngine::sort(&rows, SortKey::Name, SortOrder::Desc);
        assert_eq!(sorted.len(), rows.len());
        for r in &rows {
            assert!(sorted.contains(r));
        }
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let rows = vec![row("a", 1.0, None), row("b", 2.0, None)];
        let before = rows.clone();
        let _ = SortEngine::sort(&rows, SortKey::Vulnerabilities, SortOrder::Desc);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_coerce_to_number() {
        assert_eq!(coerce_to_number(""), 0.0);
        assert_eq!(coerce_to_number("  "), 0.0);
        assert_eq!(coerce_to_number(" 42 "), 42.0);
        assert_eq!(coerce_to_number("-1.5e2"), -150.0);
        assert_eq!(coerce_to_number("Infinity"), f64::INFINITY);
        assert!(coerce_to_number("Semgrep").is_nan());
        assert!(coerce_to_number("Yes").is_nan());
        assert!(coerce_to_number("inf").is_nan());
        assert!(coerce_to_number("1-2").is_nan());
    }

    #[test]
    fn test_coerce_radix_literals() {
        assert_eq!(coerce_to_number("0x1A"), 26.0);
        assert_eq!(coerce_to_number("0XfF"), 255.0);
        assert_eq!(coerce_to_number(" 0o17 "), 15.0);
        assert_eq!(coerce_to_number("0b101"), 5.0);
        assert!(coerce_to_number("0x").is_nan());
        assert!(coerce_to_number("0xG1").is_nan());
        assert!(coerce_to_number("0b102").is_nan());
        assert!(coerce_to_number("-0x1A").is_nan());
    }

    #[test]
    fn test_hex_names_are_ordered_numerically() {
        let rows = vec![row("0x10", 0.0, None), row("0x9", 0.0, None), row("3", 0.0, None)];
        let sorted = SortEngine::sort(&rows, SortKey::Name, SortOrder::Asc);
        assert_eq!(names(&sorted), vec!["3", "0x9", "0x10"]);
    }

    #[test]
    fn test_empty_and_single_inputs() {
        assert!(SortEngine::sort(&[], SortKey::Updates, SortOrder::Desc).is_empty());
        let single = vec![row("only", 1.0, None)];
        assert_eq!(
            SortEngine::sort(&single, SortKey::Name, SortOrder::Asc),
            single
        );
    }
}
