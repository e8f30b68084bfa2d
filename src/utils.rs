//! Shared map interface and bucket-array helpers

use crate::{ChainingMap, KeyHasher, OpenAddressingMap, TableError};

/// The operations both map variants expose, so clients can use either one.
///
/// Lookups take the key type itself; the inherent methods on each map additionally
/// accept borrowed forms such as `&str` for `String` keys.
pub trait HashMapOps<K, V> {
    /// Inserts or overwrites `key`, returning the previous value
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if a resize triggered by the insertion fails.
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, TableError>;

    /// Returns a reference to the value stored for `key`
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns true if `key` is present
    fn contains_key(&self, key: &K) -> bool;

    /// Removes `key`, returning its value; does nothing if absent
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes every entry, keeping the capacity
    fn clear(&mut self);

    /// Returns the number of entries
    fn get_size(&self) -> usize;

    /// Returns the number of buckets
    fn get_capacity(&self) -> usize;

    /// Returns `size / capacity`
    fn table_load(&self) -> f64;

    /// Returns the number of buckets free for insertion
    fn empty_buckets(&self) -> usize;

    /// Rebuilds the table with at least `new_capacity` buckets
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the new bucket array cannot be allocated.
    fn resize_table(&mut self, new_capacity: usize) -> Result<(), TableError>;

    /// Returns every pair in bucket order
    fn get_keys_and_values(&self) -> Vec<(&K, &V)>;
}

impl<K, V, H> HashMapOps<K, V> for OpenAddressingMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Self::remove(self, key)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn get_size(&self) -> usize {
        Self::get_size(self)
    }

    fn get_capacity(&self) -> usize {
        Self::get_capacity(self)
    }

    fn table_load(&self) -> f64 {
        Self::table_load(self)
    }

    fn empty_buckets(&self) -> usize {
        Self::empty_buckets(self)
    }

    fn resize_table(&mut self, new_capacity: usize) -> Result<(), TableError> {
        Self::resize_table(self, new_capacity)
    }

    fn get_keys_and_values(&self) -> Vec<(&K, &V)> {
        Self::get_keys_and_values(self)
    }
}

impl<K, V, H> HashMapOps<K, V> for ChainingMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Self::remove(self, key)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn get_size(&self) -> usize {
        Self::get_size(self)
    }

    fn get_capacity(&self) -> usize {
        Self::get_capacity(self)
    }

    fn table_load(&self) -> f64 {
        Self::table_load(self)
    }

    fn empty_buckets(&self) -> usize {
        Self::empty_buckets(self)
    }

    fn resize_table(&mut self, new_capacity: usize) -> Result<(), TableError> {
        Self::resize_table(self, new_capacity)
    }

    fn get_keys_and_values(&self) -> Vec<(&K, &V)> {
        Self::get_keys_and_values(self)
    }
}

/// Allocates a bucket array of exactly `capacity` buckets, each built by `fill`.
///
/// The reservation is fallible so a failed rebuild can be reported before the old
/// array is touched.
pub(crate) fn allocate_buckets<T>(capacity: usize, fill: impl FnMut() -> T) -> Result<Vec<T>, TableError> {
    let mut buckets = Vec::new();
    buckets
        .try_reserve_exact(capacity)
        .map_err(|source| TableError::AllocationFailed { capacity, source })?;
    buckets.resize_with(capacity, fill);
    Ok(buckets)
}
