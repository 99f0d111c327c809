//! Stable merge sort used for deterministic listings.
//!
//! Equal keys keep their input order. Callers rely on this to compose
//! orderings: sorting by a secondary key first and then stably by the primary
//! key yields "primary ascending, ties by secondary".

use std::cmp::Ordering;

/// Tagged key extracted from a record before comparison.
///
/// Integers order before strings; within a variant the natural order applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortKey<'a> {
    /// Numeric key.
    Int(u64),
    /// Lexicographic key, compared byte-wise.
    Str(&'a str),
}

/// Sorts `items` with a three-way comparator, keeping equal items in input
/// order.
#[must_use]
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_run(items, &mut compare)
}

/// Sorts `items` by the [`SortKey`] each one yields, keeping equal keys in
/// input order.
#[must_use]
pub fn merge_sort_by_key<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> SortKey<'_>,
{
    merge_sort_by(items, |left, right| key(left).cmp(&key(right)))
}

fn sort_run<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }
    let upper = items.split_off(items.len().div_ceil(2));
    let lower = sort_run(items, compare);
    let upper = sort_run(upper, compare);
    merge(lower, upper, compare)
}

fn merge<T, F>(lower: Vec<T>, upper: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(lower.len() + upper.len());
    let mut lower = lower.into_iter().peekable();
    let mut upper = upper.into_iter().peekable();

    loop {
        // Ties take from the lower run; this is what makes the sort stable.
        let take_lower = match (lower.peek(), upper.peek()) {
            (Some(left), Some(right)) => compare(left, right) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_lower { lower.next() } else { upper.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::{SortKey, merge_sort_by, merge_sort_by_key};
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![7])]
    #[case(vec![3, 1, 2], vec![1, 2, 3])]
    #[case(vec![5, 4, 3, 2, 1, 0], vec![0, 1, 2, 3, 4, 5])]
    #[case(vec![2, 2, 1, 1], vec![1, 1, 2, 2])]
    fn sorts_integers_ascending(#[case] input: Vec<u64>, #[case] expected: Vec<u64>) {
        assert_eq!(merge_sort_by_key(input, |value| SortKey::Int(*value)), expected);
    }

    #[test]
    fn sorts_strings_lexicographically() {
        let sorted = merge_sort_by_key(vec!["pear", "apple", "Zebra", "fig"], |value| {
            SortKey::Str(value)
        });
        assert_eq!(sorted, vec!["Zebra", "apple", "fig", "pear"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = vec![(3, 'a'), (1, 'b'), (3, 'c'), (1, 'd'), (2, 'e'), (3, 'f')];
        let sorted = merge_sort_by_key(records, |(key, _)| SortKey::Int(*key));
        assert_eq!(
            sorted,
            vec![(1, 'b'), (1, 'd'), (2, 'e'), (3, 'a'), (3, 'c'), (3, 'f')]
        );
    }

    #[test]
    fn two_pass_composition_breaks_ties_by_first_key() {
        let records = vec![(5, "delta"), (1, "charlie"), (5, "alpha"), (1, "bravo")];
        let by_name = merge_sort_by_key(records, |(_, name)| SortKey::Str(name));
        let by_start = merge_sort_by_key(by_name, |(start, _)| SortKey::Int(*start));
        assert_eq!(
            by_start,
            vec![(1, "bravo"), (1, "charlie"), (5, "alpha"), (5, "delta")]
        );
    }

    #[test]
    fn integer_keys_order_before_string_keys() {
        assert!(SortKey::Int(u64::MAX) < SortKey::Str(""));
    }

    #[test]
    fn comparator_form_supports_descending_order() {
        let sorted = merge_sort_by(vec![1, 3, 2], |left, right| right.cmp(left));
        assert_eq!(sorted, vec![3, 2, 1]);
    }
}
