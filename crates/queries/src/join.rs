//! Existence tests and flattening across a nested relation.
//!
//! The nested relation is given as an accessor from a primary element to
//! its nested elements, e.g. `Order::products`.

use crate::predicate::Predicate;

/// Returns true if any nested element satisfies `predicate`.
pub fn any_match<'a, N, I, P>(nested: I, predicate: &P) -> bool
where
    N: 'a,
    I: IntoIterator<Item = &'a N>,
    P: Predicate<N> + ?Sized,
{
    nested.into_iter().any(|item| predicate.test(item))
}

/// Keeps the primary elements whose nested relation has at least one match.
pub fn filter_any_nested<'a, T, N, I, F, J, P>(items: I, nested: F, predicate: &P) -> Vec<&'a T>
where
    T: 'a,
    N: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> J,
    J: IntoIterator<Item = &'a N>,
    P: Predicate<N> + ?Sized,
{
    items
        .into_iter()
        .filter(|&item| any_match(nested(item), predicate))
        .collect()
}

/// Expands every primary element into its nested elements.
///
/// Output is in primary-then-nested order and keeps duplicates.
pub fn flat_join<'a, T, N, I, F, J>(items: I, nested: F) -> Vec<&'a N>
where
    T: 'a,
    N: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> J,
    J: IntoIterator<Item = &'a N>,
{
    items.into_iter().flat_map(nested).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Basket {
        name: &'static str,
        fruit: Vec<&'static str>,
    }

    fn baskets() -> Vec<Basket> {
        vec![
            Basket {
                name: "a",
                fruit: vec!["apple", "pear"],
            },
            Basket {
                name: "b",
                fruit: vec![],
            },
            Basket {
                name: "c",
                fruit: vec!["plum", "apple", "apple"],
            },
        ]
    }

    fn fruit(basket: &Basket) -> &[&'static str] {
        &basket.fruit
    }

    #[test]
    fn test_any_match_finds_nested_element() {
        let fruit = ["pear", "plum"];
        assert!(any_match(&fruit, &|f: &&str| *f == "plum"));
        assert!(!any_match(&fruit, &|f: &&str| *f == "fig"));
    }

    #[test]
    fn test_any_match_on_empty_relation_is_false() {
        let fruit: [&str; 0] = [];
        assert!(!any_match(&fruit, &|_: &&str| true));
    }

    #[test]
    fn test_filter_any_nested_keeps_primary_order() {
        let baskets = baskets();
        let with_apple = filter_any_nested(&baskets, fruit, &|f: &&str| *f == "apple");
        let names: Vec<_> = with_apple.iter().map(|b| b.name).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_flat_join_keeps_duplicates_in_order() {
        let baskets = baskets();
        let all = flat_join(&baskets, fruit);
        assert_eq!(all, [&"apple", &"pear", &"plum", &"apple", &"apple"]);
    }

    #[test]
    fn test_flat_join_length_is_sum_of_nested_lengths() {
        let baskets = baskets();
        let expected: usize = baskets.iter().map(|b| b.fruit.len()).sum();
        assert_eq!(flat_join(&baskets, fruit).len(), expected);
    }
}
