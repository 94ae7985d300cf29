#![doc = include_str!("../README.md")]

#![no_std]

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

extern crate alloc;

use core::fmt;
use core::iter::{FromIterator, FusedIterator};

use alloc::vec::Vec;

/// Number of slots a freshly created array allocates.
const DEFAULT_CAPACITY: usize = 4;

/// Error kind for the fallible operations on an [`AssocArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The absent key (`None`) was passed to [`AssocArray::set`].
    InvalidKey,
    /// No live pair matches the requested key.
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey => f.write_str("invalid key"),
            Error::KeyNotFound => f.write_str("key not found"),
        }
    }
}

impl core::error::Error for Error {}

/// A single key/value association. The array owns its pairs exclusively.
#[derive(Debug)]
struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Clone for Pair<K, V>
where
    K: Clone,
    V: Clone
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// An associative array of key/value pairs, looked up by linear search.
///
/// Pairs live in storage order: insertion order, except that [`remove`]
/// moves the last pair into the removed slot. Storage doubles when full
/// and never shrinks. Keys only need `Eq`, not `Hash` or `Ord`, and at
/// most one live pair holds a given key.
///
/// Every lookup walks the live pairs front to back, so all operations
/// are `O(n)`.
///
/// # Examples
///
/// ```
/// use assoc_array::AssocArray;
///
/// let mut map = AssocArray::new();
/// map.set("answer", 42).unwrap();
///
/// assert_eq!(map.get(&"answer"), Ok(&42));
/// assert!(map.has_key(&"answer"));
/// assert_eq!(map.len(), 1);
/// ```
///
/// [`remove`]: AssocArray::remove
pub struct AssocArray<K, V> {
    // live pairs occupy [0, pairs.len()); allocated slots beyond that
    // are unused until the next append
    pairs: Vec<Pair<K, V>>,
}

impl<K, V> AssocArray<K, V> {
    /// Creates an empty `AssocArray` with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            pairs: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Creates an empty `AssocArray` with at least `n` slots.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(n),
        }
    }

    /// Returns the number of live pairs in the array.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the array holds no pairs.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of allocated slots. Always at least [`len`].
    ///
    /// [`len`]: AssocArray::len
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Returns an iterator over the pairs in storage order.
    ///
    /// The iterator implements `ExactSizeIterator` and `FusedIterator`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            pairs: self.pairs.iter(),
        }
    }

    /// Doubles the allocated storage.
    fn expand(&mut self) {
        self.pairs.reserve_exact(self.pairs.capacity().max(1));
    }
}

impl<K, V> AssocArray<K, V>
where
    K: Eq,
{
    /// Sets the value associated with `key`. Future calls to [`get`]
    /// with that key return `value`.
    ///
    /// If a live pair already holds `key`, its value is overwritten in
    /// place and the length does not change. Otherwise the pair is
    /// appended, doubling the storage first if it is full.
    ///
    /// The key is taken as `impl Into<Option<K>>` so the absent key is
    /// expressible; passing `None` fails with [`Error::InvalidKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssocArray, Error};
    ///
    /// let mut map = AssocArray::new();
    /// map.set(1, "a").unwrap();
    /// map.set(1, "b").unwrap();
    ///
    /// assert_eq!(map.get(&1), Ok(&"b"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.set(None, "c"), Err(Error::InvalidKey));
    /// ```
    ///
    /// [`get`]: AssocArray::get
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), Error> {
        let Some(key) = key.into() else {
            return Err(Error::InvalidKey)
        };

        if let Some(idx) = self.find_index(&key) {
            self.pairs[idx].value = value;
            return Ok(())
        }

        if self.pairs.len() == self.pairs.capacity() {
            self.expand();
        }
        self.pairs.push(Pair { key, value });

        Ok(())
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] when no live pair matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssocArray, Error};
    ///
    /// let mut map = AssocArray::new();
    /// map.set("one", 1).unwrap();
    ///
    /// assert_eq!(map.get(&"one"), Ok(&1));
    /// assert_eq!(map.get(&"two"), Err(Error::KeyNotFound));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get(&self, key: &K) -> Result<&V, Error> {
        let idx = self.find_index(key).ok_or(Error::KeyNotFound)?;
        Ok(&self.pairs[idx].value)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] when no live pair matches.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, Error> {
        let idx = self.find_index(key).ok_or(Error::KeyNotFound)?;
        Ok(&mut self.pairs[idx].value)
    }

    /// Returns `true` if a live pair holds `key`. Never fails.
    #[inline]
    pub fn has_key(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes the pair associated with `key`, returning its value.
    ///
    /// The last pair in storage is moved into the vacated slot, so the
    /// relative order of the remaining pairs changes. A missing key
    /// leaves the array untouched and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1).unwrap();
    /// map.set("b", 2).unwrap();
    /// map.set("c", 3).unwrap();
    ///
    /// assert_eq!(map.remove(&"a"), Some(1));
    /// assert_eq!(map.remove(&"a"), None);
    ///
    /// // "c" took the removed slot
    /// let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec!["c", "b"]);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.find_index(key)?;
        Some(self.pairs.swap_remove(idx).value)
    }

    /// Index of the first live pair whose key equals `key`.
    #[cfg_attr(feature = "inline-more", inline)]
    fn find_index(&self, key: &K) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.key == *key)
    }
}

/// Borrowing iterator over the pairs of an [`AssocArray`] in storage
/// order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    pairs: core::slice::Iter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[cfg_attr(feature = "inline-more", inline)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next().map(|pair| (&pair.key, &pair.value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> FromIterator<(K, V)> for AssocArray<K, V>
where
    K: Eq,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut array = AssocArray::with_capacity(iter.size_hint().0);
        iter.for_each(|(k, v)| _ = array.set(k, v));
        array
    }
}

impl<K, V> Extend<(K, V)> for AssocArray<K, V>
where
    K: Eq,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| _ = self.set(k, v));
    }
}

impl<K, V> Default for AssocArray<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for AssocArray<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Deep-copies every live pair into independent storage. Mutating
    /// the clone never affects the original and vice versa.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K, V> PartialEq for AssocArray<K, V>
where
    K: Eq,
    V: PartialEq,
{
    /// Two arrays are equal when they hold the same key/value pairs,
    /// regardless of storage order. Order is a removal artifact, not
    /// part of map identity.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(key, value)| {
            other
                .find_index(key)
                .is_some_and(|idx| other.pairs[idx].value == *value)
        })
    }
}

impl<K, V> Eq for AssocArray<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> fmt::Debug for AssocArray<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> fmt::Display for AssocArray<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    /// Renders as `{}` when empty, otherwise `{ k1: v1, k2: v2 }` in
    /// storage order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (idx, pair) in self.pairs.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str(" }")
    }
}
