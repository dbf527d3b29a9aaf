//! A hash set with the set algebra puzzle code keeps reaching for.

use std::{
    collections::{hash_map::RandomState, hash_set, HashSet},
    fmt,
    hash::{BuildHasher, Hash},
};

#[derive(Clone)]
pub struct Set<T, S = RandomState> {
    values: HashSet<T, S>,
}

impl<T> Set<T> {
    #[inline]
    pub fn new() -> Self {
        Self { values: HashSet::new() }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self { values: HashSet::with_capacity(cap) }
    }
}

impl<T, S> Set<T, S> {
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self { values: HashSet::with_hasher(hasher) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.values.clear()
    }

    /// Visits every element once, in no particular order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.values.iter()
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.values.hasher()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Set<T, S> {
    /// Returns whether `value` was newly added.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.values.insert(value)
    }

    /// Returns whether `value` was present. Removing an absent value is fine.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.values.remove(value)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.values.is_subset(&other.values)
    }

    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.values.is_superset(&other.values)
    }

    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.values.is_disjoint(&other.values)
    }
}

/// Elements in `x`, `y` or both.
pub fn union<T, S>(x: &Set<T, S>, y: &Set<T, S>) -> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    collect_with(x.hasher(), x.values.union(&y.values))
}

/// Elements in both `x` and `y`.
pub fn intersection<T, S>(x: &Set<T, S>, y: &Set<T, S>) -> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    collect_with(x.hasher(), x.values.intersection(&y.values))
}

/// Elements in `x` but not in `y`.
pub fn difference<T, S>(x: &Set<T, S>, y: &Set<T, S>) -> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    collect_with(x.hasher(), x.values.difference(&y.values))
}

/// Elements in exactly one of `x` and `y`.
pub fn symmetric_difference<T, S>(x: &Set<T, S>, y: &Set<T, S>) -> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    collect_with(x.hasher(), x.values.symmetric_difference(&y.values))
}

/// Every ordered pair `(a, b)` with `a` from `x` and `b` from `y`.
pub fn cartesian_product<T, U, S, R>(x: &Set<T, S>, y: &Set<U, R>) -> Set<(T, U)>
where
    T: Eq + Hash + Clone,
    U: Eq + Hash + Clone,
{
    let mut product = Set::with_capacity(x.len() * y.len());
    for a in x {
        for b in y {
            product.insert((a.clone(), b.clone()));
        }
    }
    product
}

fn collect_with<'a, T, S>(hasher: &S, values: impl Iterator<Item = &'a T>) -> Set<T, S>
where
    T: 'a + Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    let mut set = Set::with_hasher(hasher.clone());
    set.extend(values.cloned());
    set
}

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for Set<T, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for Set<T, S> {}

/// Renders as `{a, b, c}` in iteration order, or `{}` when empty.
impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { values: HashSet::from_iter(iter) }
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for Set<T, S> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;

    type IntoIter = hash_set::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;

    type IntoIter = hash_set::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
