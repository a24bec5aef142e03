//! Composable predicates and conjunction filtering.

/// A condition over values of type `T`.
///
/// Any `Fn(&T) -> bool` is a predicate. Predicates are defined on their own
/// and combined with [`and`](Predicate::and), [`or`](Predicate::or) and
/// [`not`](Predicate::not), or collected at runtime into a [`Conjunction`].
pub trait Predicate<T: ?Sized> {
    /// Returns true if `item` satisfies the condition.
    fn test(&self, item: &T) -> bool;

    /// Both conditions must hold.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And(self, other)
    }

    /// At least one condition must hold.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or(self, other)
    }

    /// Negates the condition.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn test(&self, item: &T) -> bool {
        self.0.test(item) && self.1.test(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn test(&self, item: &T) -> bool {
        self.0.test(item) || self.1.test(item)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Not<A>(A);

impl<T: ?Sized, A: Predicate<T>> Predicate<T> for Not<A> {
    fn test(&self, item: &T) -> bool {
        !self.0.test(item)
    }
}

/// A list of predicates that must all hold.
///
/// An empty conjunction accepts everything.
pub struct Conjunction<'p, T: ?Sized> {
    predicates: Vec<Box<dyn Predicate<T> + 'p>>,
}

impl<'p, T: ?Sized> Conjunction<'p, T> {
    /// Creates an empty conjunction.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Adds a predicate.
    pub fn with(mut self, predicate: impl Predicate<T> + 'p) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Adds a predicate in place.
    pub fn push(&mut self, predicate: impl Predicate<T> + 'p) {
        self.predicates.push(Box::new(predicate));
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<T: ?Sized> Default for Conjunction<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Predicate<T> for Conjunction<'_, T> {
    fn test(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p.test(item))
    }
}

impl<T: ?Sized> std::fmt::Debug for Conjunction<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conjunction")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Returns the items that satisfy `predicate`, in their original order.
pub fn filter<'a, T, I, P>(items: I, predicate: &P) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: Predicate<T> + ?Sized,
{
    items
        .into_iter()
        .filter(|item| predicate.test(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even(n: &i32) -> bool {
        n % 2 == 0
    }

    fn positive(n: &i32) -> bool {
        *n > 0
    }

    #[test]
    fn test_closures_are_predicates() {
        let big = |n: &i32| *n > 10;
        assert!(big.test(&11));
        assert!(!big.test(&10));
    }

    #[test]
    fn test_and_requires_both() {
        let p = even.and(positive);
        assert!(p.test(&4));
        assert!(!p.test(&-4));
        assert!(!p.test(&3));
    }

    #[test]
    fn test_or_requires_either() {
        let p = even.or(positive);
        assert!(p.test(&-4));
        assert!(p.test(&3));
        assert!(!p.test(&-3));
    }

    #[test]
    fn test_not_negates() {
        assert!(even.not().test(&3));
        assert!(!even.not().test(&2));
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = [5, -2, 8, 3, 6];
        assert_eq!(filter(&items, &even), [&-2, &8, &6]);
    }

    #[test]
    fn test_filter_empty_input() {
        let items: [i32; 0] = [];
        assert!(filter(&items, &even).is_empty());
    }

    #[test]
    fn test_conjunction_matches_chained_and() {
        let items = [-6, -3, 0, 2, 7, 12];
        let conjunction = Conjunction::new().with(even).with(positive);
        assert_eq!(conjunction.len(), 2);
        assert_eq!(filter(&items, &conjunction), filter(&items, &even.and(positive)));
    }

    #[test]
    fn test_empty_conjunction_accepts_everything() {
        let items = [1, 2, 3];
        let conjunction: Conjunction<'_, i32> = Conjunction::default();
        assert!(conjunction.is_empty());
        assert_eq!(filter(&items, &conjunction).len(), 3);
    }

    #[test]
    fn test_conjunction_can_borrow_local_state() {
        let threshold = 3;
        let mut conjunction = Conjunction::new();
        conjunction.push(|n: &i32| *n > threshold);
        conjunction.push(even);
        assert_eq!(filter(&[2, 4, 5, 8], &conjunction), [&4, &8]);
    }
}
