//! Group-by with per-group reductions.
//!
//! [`group_by`] partitions a sequence in one pass into an insertion-ordered
//! map from key to members. Keys iterate in the order they were first seen,
//! and members keep their input order, so "first encountered" tie-breaks
//! are deterministic.

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{QueryError, Result};

/// A sequence partitioned by key. Every group has at least one member.
#[derive(Debug, Clone)]
pub struct Groups<'a, K, T> {
    groups: IndexMap<K, Vec<&'a T>>,
}

/// Partitions `items` by the key `key` extracts from each one.
pub fn group_by<'a, T, K, I, F>(items: I, mut key: F) -> Groups<'a, K, T>
where
    T: 'a,
    K: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T) -> K,
{
    let mut groups: IndexMap<K, Vec<&'a T>> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    Groups { groups }
}

impl<'a, K: Hash + Eq, T> Groups<'a, K, T> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// Members of one group, in input order.
    pub fn get(&self, key: &K) -> Option<&[&'a T]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a T])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_inner(self) -> IndexMap<K, Vec<&'a T>> {
        self.groups
    }

    /// Applies `reduce` to the members of each group.
    pub fn reduce_each<R, F>(self, mut reduce: F) -> IndexMap<K, R>
    where
        F: FnMut(&[&'a T]) -> R,
    {
        self.groups
            .into_iter()
            .map(|(key, members)| {
                let reduced = reduce(&members);
                (key, reduced)
            })
            .collect()
    }

    /// Group size per key.
    pub fn counting(self) -> IndexMap<K, usize> {
        self.reduce_each(|members| members.len())
    }

    /// A derived attribute of every member, per key.
    pub fn mapping<U, F>(self, mut f: F) -> IndexMap<K, Vec<U>>
    where
        F: FnMut(&'a T) -> U,
    {
        self.reduce_each(|members| members.iter().map(|&m| f(m)).collect())
    }

    /// Sum of a numeric attribute per key.
    pub fn summing<F>(self, mut f: F) -> IndexMap<K, f64>
    where
        F: FnMut(&'a T) -> f64,
    {
        self.reduce_each(|members| members.iter().map(|&m| f(m)).sum())
    }

    /// The member with the largest key per group.
    ///
    /// Groups are never empty, so every key maps to a member. Ties keep the
    /// member encountered first.
    pub fn max_by<V, F>(self, mut key: F) -> IndexMap<K, &'a T>
    where
        V: PartialOrd,
        F: FnMut(&'a T) -> V,
    {
        self.groups
            .into_iter()
            .filter_map(|(k, members)| {
                extreme_by(&members, &mut key, Ordering::Greater).map(|best| (k, best))
            })
            .collect()
    }

    /// The member with the smallest key per group; ties keep the first.
    pub fn min_by<V, F>(self, mut key: F) -> IndexMap<K, &'a T>
    where
        V: PartialOrd,
        F: FnMut(&'a T) -> V,
    {
        self.groups
            .into_iter()
            .filter_map(|(k, members)| {
                extreme_by(&members, &mut key, Ordering::Less).map(|best| (k, best))
            })
            .collect()
    }

    /// Reduces each group, then post-processes each reduced value.
    pub fn collecting_and_then<R, U, F, G>(self, reduce: F, mut finish: G) -> IndexMap<K, U>
    where
        F: FnMut(&[&'a T]) -> R,
        G: FnMut(R) -> U,
    {
        self.reduce_each(reduce)
            .into_iter()
            .map(|(key, reduced)| (key, finish(reduced)))
            .collect()
    }
}

fn extreme_by<'a, T, V, F>(members: &[&'a T], key: &mut F, wanted: Ordering) -> Option<&'a T>
where
    V: PartialOrd,
    F: FnMut(&'a T) -> V,
{
    let (&first, rest) = members.split_first()?;
    let mut best = first;
    let mut best_key = key(first);
    for &candidate in rest {
        let candidate_key = key(candidate);
        if candidate_key.partial_cmp(&best_key) == Some(wanted) {
            best = candidate;
            best_key = candidate_key;
        }
    }
    Some(best)
}

/// Builds a map with exactly one entry per element.
///
/// Two elements producing the same key is an error rather than a silent
/// overwrite.
pub fn to_map<'a, T, K, V, I, FK, FV>(items: I, mut key: FK, mut value: FV) -> Result<IndexMap<K, V>>
where
    T: 'a,
    K: Hash + Eq + Display,
    I: IntoIterator<Item = &'a T>,
    FK: FnMut(&'a T) -> K,
    FV: FnMut(&'a T) -> V,
{
    let mut map = IndexMap::new();
    for item in items {
        match map.entry(key(item)) {
            Entry::Occupied(entry) => return Err(QueryError::DuplicateKey(entry.key().to_string())),
            Entry::Vacant(entry) => {
                entry.insert(value(item));
            }
        }
    }
    Ok(map)
}

/// Folds a sequence into one value starting from `identity`.
pub fn reduce<'a, T, A, I, F>(items: I, identity: A, accumulate: F) -> A
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(A, &'a T) -> A,
{
    items.into_iter().fold(identity, accumulate)
}
