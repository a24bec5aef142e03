//! Non-mutating element transforms.
//!
//! Sources are only ever borrowed; each output element is a fresh value.

/// Maps every element to a derived value.
pub fn derive_each<'a, T, U, I, F>(items: I, derive: F) -> Vec<U>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T) -> U,
{
    items.into_iter().map(derive).collect()
}

/// Maps every element to a derived value, stopping at the first error.
pub fn try_derive_each<'a, T, U, E, I, F>(items: I, derive: F) -> Result<Vec<U>, E>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T) -> Result<U, E>,
{
    items.into_iter().map(derive).collect()
}
