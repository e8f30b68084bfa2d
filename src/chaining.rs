use std::{borrow::Borrow, fmt, mem};

use log::{debug, trace};

use crate::{
    KeyHasher, StdHasher, TableError,
    chain::{self, Chain},
    prime::{grown_capacity, prime_capacity},
    utils::allocate_buckets,
};

/// Load factor a `put` may not reach; the table grows first
pub const MAX_LOAD_FACTOR: f64 = 1.0;

/// Capacity used by `Default`
pub const DEFAULT_CAPACITY: usize = 11;

/// A hash map resolving collisions with one singly linked chain per bucket.
///
/// Removal unlinks the node immediately; there are no tombstones. The table grows to
/// the next prime after twice its capacity before a `put` would bring the load factor
/// to [`MAX_LOAD_FACTOR`].
///
/// Note: This implementation is not thread-safe.
#[derive(Debug)]
pub struct ChainingMap<K, V, H = StdHasher> {
    /// One chain per bucket; the length is the capacity and is always prime
    buckets: Vec<Chain<K, V>>,
    /// Number of entries across all chains
    size: usize,
    /// Hash function chosen at construction
    hasher: H,
}

impl<K, V> Default for ChainingMap<K, V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K, V> ChainingMap<K, V> {
    /// Creates a map with at least `capacity` buckets hashing keys with [`StdHasher`]
    ///
    /// # Panics
    ///
    /// Panics if the bucket array cannot be allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, StdHasher)
    }
}

impl<K, V, H> ChainingMap<K, V, H> {
    /// Creates a map whose capacity is the smallest prime at or above `capacity`
    ///
    /// # Panics
    ///
    /// Panics if the bucket array cannot be allocated.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(capacity: usize, hasher: H) -> Self {
        Self::try_new(capacity, hasher).expect("failed to allocate the bucket array")
    }

    /// Creates a map whose capacity is the smallest prime at or above `capacity`
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the bucket array cannot be allocated.
    pub fn try_new(capacity: usize, hasher: H) -> Result<Self, TableError> {
        let capacity = prime_capacity(capacity)?;
        let buckets = allocate_buckets(capacity, Chain::new)?;

        Ok(Self { buckets, size: 0, hasher })
    }

    /// Returns the number of entries
    #[must_use]
    pub const fn get_size(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets, always a prime
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `size / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the number of buckets with an empty chain
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Empties every chain, keeping the capacity
    pub fn clear(&mut self) {
        trace!("clearing {} buckets", self.buckets.len());
        self.buckets.fill_with(Chain::new);
        self.size = 0;
    }

    /// Returns an iterator over the entries, bucket by bucket, each chain in
    /// insertion order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), current: None }
    }

    /// Returns every pair, bucket by bucket
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Index of the bucket `key` hashes to
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        H: KeyHasher<Q>,
    {
        // capacity is never zero
        (self.hasher.hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Returns a reference to the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.buckets.get(self.bucket_index(key))?.contains(key)
    }

    /// Returns a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)?.contains_mut(key)
    }

    /// Returns true if `key` is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.get(key).is_some()
    }

    /// Unlinks `key` from its chain and returns its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.bucket_index(key);
        let (_, value) = self.buckets.get_mut(index)?.remove(key)?;
        self.size = self.size.saturating_sub(1);
        Some(value)
    }
}

impl<K, V, H> ChainingMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// Inserts or overwrites `key`, returning the previous value if there was one
    ///
    /// Overwriting a present key never resizes. New keys are appended to the end of
    /// their bucket's chain; if one more entry would bring the load factor to
    /// [`MAX_LOAD_FACTOR`], the table is first rebuilt at the next prime after twice
    /// its capacity.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if that rebuild cannot allocate its bucket array.
    #[allow(clippy::indexing_slicing)]
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        let index = self.bucket_index(&key);
        if let Some(existing) = self.buckets.get_mut(index).and_then(|chain| chain.contains_mut(&key)) {
            return Ok(Some(mem::replace(existing, value)));
        }

        if self.load_after_insert() >= MAX_LOAD_FACTOR {
            self.grow()?;
        }

        let index = self.bucket_index(&key);
        // `bucket_index` is reduced modulo the bucket count
        self.buckets[index].insert(key, value);
        self.size = self.size.saturating_add(1);
        Ok(None)
    }

    /// Rebuilds the table with the smallest prime capacity at or above `new_capacity`
    ///
    /// Does nothing if `new_capacity` is zero. Every entry is re-inserted with the
    /// regular `put` logic, which grows the table further if `new_capacity` is too
    /// small for the current entries.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the new bucket array cannot be allocated. The map is
    /// untouched when the first allocation fails.
    pub fn resize_table(&mut self, new_capacity: usize) -> Result<(), TableError> {
        if new_capacity < 1 {
            debug!("ignoring resize to {new_capacity} buckets");
            return Ok(());
        }

        let capacity = prime_capacity(new_capacity)?;
        let fresh = allocate_buckets(capacity, Chain::new)?;
        debug!("resizing from {} to {capacity} buckets with {} entries", self.buckets.len(), self.size);

        let old = mem::replace(&mut self.buckets, fresh);
        self.size = 0;
        for (key, value) in old.into_iter().flatten() {
            self.put(key, value)?;
        }

        Ok(())
    }

    /// Load factor the table would have with one more entry
    #[allow(clippy::cast_precision_loss)]
    fn load_after_insert(&self) -> f64 {
        self.size.saturating_add(1) as f64 / self.buckets.len() as f64
    }

    /// Grows to the next prime after twice the current capacity
    fn grow(&mut self) -> Result<(), TableError> {
        self.resize_table(grown_capacity(self.buckets.len())?)
    }
}

impl<K, V> FromIterator<(K, V)> for ChainingMap<K, V>
where
    K: Eq + std::hash::Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, H> Extend<(K, V)> for ChainingMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// # Panics
    ///
    /// Panics if growing the table fails to allocate.
    #[allow(clippy::expect_used)]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value).expect("failed to grow the bucket array");
        }
    }
}

impl<K, V, H> fmt::Display for ChainingMap<K, V, H>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {chain}")?;
        }
        Ok(())
    }
}

impl<'a, K, V, H> IntoIterator for &'a ChainingMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`ChainingMap`]
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    /// Buckets not yet visited
    buckets: std::slice::Iter<'a, Chain<K, V>>,
    /// Position in the bucket being walked
    current: Option<chain::Iter<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.current.as_mut().and_then(Iterator::next) {
                return Some(pair);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }
}
