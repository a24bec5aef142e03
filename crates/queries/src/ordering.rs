//! Comparators, stable sorting and bounded selection.

use std::cmp::Ordering;

/// Direction of a sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Builds a comparator from a key extractor.
///
/// Keys that do not compare equal to themselves (NaN) sort after every other
/// key in both directions and keep their relative order, so the comparator is
/// a total order even for float keys.
pub fn comparing<T, K, F>(key: F, order: SortOrder) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| compare_keys(&key(a), &key(b), order)
}

fn compare_keys<K: PartialOrd>(a: &K, b: &K, order: SortOrder) -> Ordering {
    match (is_comparable(a), is_comparable(b)) {
        (true, true) => order.apply(a.partial_cmp(b).unwrap_or(Ordering::Equal)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

fn is_comparable<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_some()
}

/// Chains two comparators; `second` only breaks ties left by `first`.
pub fn then_comparing<T, A, B>(first: A, second: B) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    A: Fn(&T, &T) -> Ordering,
    B: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| first(a, b).then_with(|| second(a, b))
}

/// Sorts borrowed elements with a stable sort.
pub fn sorted<'a, T, I, C>(items: I, comparator: C) -> Vec<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: Fn(&T, &T) -> Ordering,
{
    let mut items: Vec<&'a T> = items.into_iter().collect();
    items.sort_by(|a, b| comparator(*a, *b));
    items
}

/// Sorts then keeps the first `n` elements.
///
/// `n` larger than the input returns everything; an empty input returns an
/// empty result.
pub fn top_n<'a, T, I, C>(items: I, comparator: C, n: usize) -> Vec<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: Fn(&T, &T) -> Ordering,
{
    let mut items = sorted(items, comparator);
    items.truncate(n);
    items
}
