use std::{borrow::Borrow, fmt, mem};

use log::{debug, trace};

use crate::{
    KeyHasher, StdHasher, TableError,
    prime::{grown_capacity, prime_capacity},
    utils::allocate_buckets,
};

/// Load factor at or above which `put` grows the table before inserting
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// Capacity used by `Default`
pub const DEFAULT_CAPACITY: usize = 11;

/// A live key-value pair
#[derive(Debug, Clone, PartialEq, Eq)]
struct HashEntry<K, V> {
    /// The key, fixed once inserted
    key: K,
    /// The value associated with the key
    value: V,
}

/// State of one position in the bucket array
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<K, V> {
    /// Never written since the last rebuild or clear; ends every probe sequence
    Empty,
    /// Held an entry that was removed; probing continues past it
    Tombstone,
    /// Holds a live entry
    Occupied(HashEntry<K, V>),
}

impl<K, V> Slot<K, V> {
    /// Returns `true` for a live entry
    const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }
}

/// Quadratic probe sequence `(home + i²) mod capacity` for `i` in `0..capacity`.
#[derive(Debug, Clone)]
struct QuadraticProbe {
    /// Slot index for the current step
    index: usize,
    /// Current `i`
    step: usize,
    /// Number of slots in the table
    capacity: usize,
}

impl QuadraticProbe {
    /// Starts a probe sequence for `hash` over `capacity` slots
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn new(hash: u64, capacity: usize) -> Self {
        let home = (hash % capacity as u64) as usize;
        Self { index: home, step: 0, capacity }
    }
}

impl Iterator for QuadraticProbe {
    type Item = usize;

    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.capacity {
            return None;
        }

        let current = self.index;
        // (i + 1)² - i² = 2i + 1, kept reduced so nothing overflows
        let delta = (2 * self.step + 1) % self.capacity;
        self.index = (self.index + delta) % self.capacity;
        self.step += 1;

        Some(current)
    }
}

/// A hash map resolving collisions by quadratic probing over a prime-length array.
///
/// Removed entries leave tombstones behind so the probe sequences of other keys stay
/// intact. Tombstones count as free space for `empty_buckets` and for insertion, and
/// are discarded on the next resize or clear.
///
/// The table grows to the next prime after twice its capacity before a `put` would
/// bring the load factor to [`MAX_LOAD_FACTOR`], so every probe sequence reaches a
/// free slot within its first half.
///
/// Note: This implementation is not thread-safe.
///
/// ```rust
/// use primehash::{OpenAddressingMap, Positional};
///
/// let mut map = OpenAddressingMap::new(10, Positional);
/// assert_eq!(map.get_capacity(), 11);
///
/// map.put("apple".to_string(), 1).unwrap();
/// map.put("banana".to_string(), 2).unwrap();
/// assert_eq!(map.get("apple"), Some(&1));
///
/// map.remove("apple");
/// assert!(!map.contains_key("apple"));
/// assert_eq!(map.get_size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct OpenAddressingMap<K, V, H = StdHasher> {
    /// The bucket array; its length is the capacity and is always prime
    slots: Vec<Slot<K, V>>,
    /// Number of live entries
    size: usize,
    /// Hash function chosen at construction
    hasher: H,
}

impl<K, V> Default for OpenAddressingMap<K, V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K, V> OpenAddressingMap<K, V> {
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

impl<K, V, H> OpenAddressingMap<K, V, H> {
    /// Creates a map whose capacity is the smallest prime at or above `capacity`
    ///
    /// # Panics
    ///
    /// Panics if the bucket array cannot be allocated, like `Vec::with_capacity`.
    /// Use [`OpenAddressingMap::try_new`] to handle that case.
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
        let slots = allocate_buckets(capacity, || Slot::Empty)?;

        Ok(Self { slots, size: 0, hasher })
    }

    /// Returns the number of live entries
    #[must_use]
    pub const fn get_size(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots, always a prime
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `size / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Returns the number of slots that are empty or tombstoned
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_occupied()).count()
    }

    /// Removes every entry and tombstone, keeping the capacity
    pub fn clear(&mut self) {
        trace!("clearing {} slots", self.slots.len());
        self.slots.fill_with(|| Slot::Empty);
        self.size = 0;
    }

    /// Returns an iterator over the live entries in ascending slot order
    ///
    /// The iterator keeps its own cursor, so any number of them can walk the same
    /// map at once; the map cannot be mutated while one is alive.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0 }
    }

    /// Returns every live pair in slot order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Finds the slot for `key`: the slot holding it if present, otherwise the first
    /// tombstone or empty slot on its probe sequence.
    ///
    /// Returns `None` only if the whole sequence is live entries with other keys.
    fn probe<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let mut first_free = None;

        for index in QuadraticProbe::new(self.hasher.hash_key(key), self.slots.len()) {
            match self.slots.get(index) {
                Some(Slot::Occupied(entry)) => {
                    if entry.key.borrow() == key {
                        return Some(index);
                    }
                }
                Some(Slot::Tombstone) => {
                    if first_free.is_none() {
                        first_free = Some(index);
                    }
                }
                Some(Slot::Empty) => return first_free.or(Some(index)),
                None => break,
            }
        }

        first_free
    }

    /// Returns the slot index holding `key`, if it is live
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.probe(key).filter(|&index| self.slots.get(index).is_some_and(Slot::is_occupied))
    }

    /// Returns a reference to the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        match self.slots.get(self.find(key)?)? {
            Slot::Occupied(entry) => Some(&entry.value),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    /// Returns a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.find(key)?;
        match self.slots.get_mut(index)? {
            Slot::Occupied(entry) => Some(&mut entry.value),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    /// Returns true if `key` has a live entry
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.find(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot, and returns its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let index = self.find(key)?;
        let slot = self.slots.get_mut(index)?;

        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied(entry) => {
                self.size = self.size.saturating_sub(1);
                trace!("tombstoned slot {index}");
                Some(entry.value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }
}

impl<K, V, H> OpenAddressingMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// Inserts or overwrites `key`, returning the previous value if there was one
    ///
    /// Overwriting a live key never resizes. If a new entry would bring the load
    /// factor to [`MAX_LOAD_FACTOR`] or above, the table is first rebuilt at the next
    /// prime after twice its capacity, so the load factor stays below the threshold
    /// once `put` returns.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if that rebuild cannot allocate its bucket array.
    #[allow(clippy::indexing_slicing)]
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        if let Some(Slot::Occupied(entry)) = self.find(&key).and_then(|index| self.slots.get_mut(index)) {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        if self.load_after_insert() >= MAX_LOAD_FACTOR {
            self.grow()?;
        }

        loop {
            let Some(index) = self.probe(&key) else {
                // every slot on the sequence is live; only reachable through an
                // undersized `resize_table`
                self.grow()?;
                continue;
            };

            // `probe` only returns indices below the capacity
            let slot = &mut self.slots[index];
            return Ok(match slot {
                Slot::Occupied(entry) => Some(mem::replace(&mut entry.value, value)),
                free => {
                    *free = Slot::Occupied(HashEntry { key, value });
                    self.size = self.size.saturating_add(1);
                    None
                }
            });
        }
    }

    /// Rebuilds the table with the smallest prime capacity at or above `new_capacity`
    ///
    /// Does nothing if `new_capacity` is below the number of live entries. Tombstones
    /// are dropped and every live entry is re-inserted with the regular `put` logic,
    /// which may grow the table further if `new_capacity` leaves it too full.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the new bucket array cannot be allocated. The map is
    /// untouched when the first allocation fails.
    pub fn resize_table(&mut self, new_capacity: usize) -> Result<(), TableError> {
        if new_capacity < self.size {
            debug!("ignoring resize to {new_capacity}, below {} live entries", self.size);
            return Ok(());
        }

        let capacity = prime_capacity(new_capacity)?;
        let fresh = allocate_buckets(capacity, || Slot::Empty)?;
        debug!("resizing from {} to {capacity} slots with {} entries", self.slots.len(), self.size);

        let old = mem::replace(&mut self.slots, fresh);
        self.size = 0;
        for slot in old {
            if let Slot::Occupied(HashEntry { key, value }) = slot {
                self.put(key, value)?;
            }
        }

        Ok(())
    }

    /// Load factor the table would have with one more entry
    #[allow(clippy::cast_precision_loss)]
    fn load_after_insert(&self) -> f64 {
        self.size.saturating_add(1) as f64 / self.slots.len() as f64
    }

    /// Grows to the next prime after twice the current capacity
    fn grow(&mut self) -> Result<(), TableError> {
        self.resize_table(grown_capacity(self.slots.len())?)
    }
}

impl<K, V> FromIterator<(K, V)> for OpenAddressingMap<K, V>
where
    K: Eq + std::hash::Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, H> Extend<(K, V)> for OpenAddressingMap<K, V, H>
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

impl<K, V, H> fmt::Display for OpenAddressingMap<K, V, H>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: None")?,
                Slot::Tombstone => writeln!(f, "{index}: TS")?,
                Slot::Occupied(entry) => writeln!(f, "{index}: K: {} V: {}", entry.key, entry.value)?,
            }
        }
        Ok(())
    }
}

impl<'a, K, V, H> IntoIterator for &'a OpenAddressingMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live entries of an [`OpenAddressingMap`], in slot order
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The map's slots
    slots: &'a [Slot<K, V>],
    /// Next slot to inspect
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Slot::Occupied(entry) = slot {
                return Some((&entry.key, &entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len().saturating_sub(self.index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Additive, prime::is_prime};

    /// Hashes integers to themselves so slot positions are predictable
    fn identity(key: &u64) -> u64 {
        *key
    }

    fn sorted_pairs<K: Ord + Clone, V: Ord + Clone, H>(map: &OpenAddressingMap<K, V, H>) -> Vec<(K, V)> {
        let mut pairs: Vec<(K, V)> =
            map.get_keys_and_values().into_iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_capacity_is_coerced_to_prime() {
        assert_eq!(OpenAddressingMap::<u64, u64>::with_capacity(10).get_capacity(), 11);
        assert_eq!(OpenAddressingMap::<u64, u64>::with_capacity(0).get_capacity(), 2);
        assert_eq!(OpenAddressingMap::<u64, u64>::with_capacity(1).get_capacity(), 2);
        assert_eq!(OpenAddressingMap::<u64, u64>::with_capacity(24).get_capacity(), 29);
        assert_eq!(OpenAddressingMap::<u64, u64>::default().get_capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_put_and_get() {
        let mut map = OpenAddressingMap::new(11, Additive);
        assert_eq!(map.put("key1".to_string(), 1), Ok(None));
        assert_eq!(map.put("key2".to_string(), 2), Ok(None));
        assert_eq!(map.put("key3".to_string(), 3), Ok(None));

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
        assert_eq!(map.get("key4"), None);
        assert!(map.contains_key("key2"));
        assert!(!map.contains_key("key4"));
    }

    #[test]
    fn test_overwrite_keeps_size() {
        let mut map = OpenAddressingMap::with_capacity(11);
        assert_eq!(map.put("key1", 1), Ok(None));
        assert_eq!(map.put("key1", 10), Ok(Some(1)));
        assert_eq!(map.get("key1"), Some(&10));
        assert_eq!(map.get_size(), 1);
    }

    #[test]
    fn test_sixth_insert_resizes_to_23() {
        let mut map = OpenAddressingMap::new(11, identity);
        for key in 0..5u64 {
            map.put(key, key).unwrap();
        }
        assert_eq!(map.get_capacity(), 11);
        assert!(map.table_load() < MAX_LOAD_FACTOR);

        map.put(5u64, 5).unwrap();
        assert_eq!(map.get_capacity(), 23);
        assert_eq!(map.get_size(), 6);
        for key in 0..6u64 {
            assert_eq!(map.get(&key), Some(&key));
        }
    }

    #[test]
    fn test_overwrite_at_threshold_does_not_resize() {
        let mut map = OpenAddressingMap::new(11, identity);
        for key in 0..5u64 {
            map.put(key, key).unwrap();
        }

        assert_eq!(map.put(0, 100).unwrap(), Some(0));
        assert_eq!(map.get_capacity(), 11);
        assert_eq!(map.get_size(), 5);
        assert_eq!(map.get(&0u64), Some(&100));

        map.put(5, 5).unwrap();
        assert_eq!(map.get_capacity(), 23);
    }

    #[test]
    fn test_quadratic_probe_positions() {
        let mut map: OpenAddressingMap<u64, char, _> = OpenAddressingMap::new(11, |_: &u64| 3_u64);
        map.put(100, 'a').unwrap();
        map.put(200, 'b').unwrap();
        map.put(300, 'c').unwrap();
        map.put(400, 'd').unwrap();

        // home 3, then 3 + 1, 3 + 4, 3 + 9 (mod 11)
        let slots: Vec<u64> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(slots, vec![400, 100, 200, 300]);
        assert_eq!(format!("{map}").lines().nth(1), Some("1: K: 400 V: d"));
    }

    #[test]
    fn test_probe_sequence_visits_half_the_table() {
        let capacity = 23;
        let mut seen: Vec<usize> = QuadraticProbe::new(7, capacity).collect();
        assert_eq!(seen.len(), capacity);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), capacity.div_ceil(2));
    }

    #[test]
    fn test_remove_leaves_tombstone() {
        let mut map: OpenAddressingMap<u64, &str, _> = OpenAddressingMap::new(11, |_: &u64| 0_u64);
        map.put(1, "one").unwrap();
        map.put(2, "two").unwrap();
        map.put(3, "three").unwrap();

        assert_eq!(map.remove(&2), Some("two"));
        assert_eq!(map.get_size(), 2);
        assert_eq!(map.empty_buckets(), 9);
        assert_eq!(format!("{map}").lines().nth(1), Some("1: TS"));

        // 3 sits past the tombstone on the shared probe sequence
        assert_eq!(map.get(&3), Some(&"three"));
        assert!(!map.contains_key(&2));
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.get_size(), 2);
    }

    #[test]
    fn test_put_reuses_tombstone_without_duplicating() {
        let mut map: OpenAddressingMap<u64, i32, _> = OpenAddressingMap::new(11, |_: &u64| 0_u64);
        map.put(1, 1).unwrap();
        map.put(2, 2).unwrap();
        map.put(3, 3).unwrap();
        map.remove(&1);

        // 3 lives beyond the tombstone; overwriting must find it, not fill slot 0
        assert_eq!(map.put(3, 30), Ok(Some(3)));
        assert_eq!(map.get_size(), 2);
        assert_eq!(map.iter().count(), 2);

        // a new key takes the first tombstone
        map.put(4, 4).unwrap();
        assert_eq!(map.iter().next(), Some((&4, &4)));
        assert_eq!(map.get_size(), 3);
    }

    #[test]
    fn test_empty_buckets_counts_tombstones() {
        let mut map = OpenAddressingMap::with_capacity(53);
        for key in 0..20u32 {
            map.put(key, key).unwrap();
        }
        for key in 0..10u32 {
            map.remove(&key);
        }
        assert_eq!(map.get_size(), 10);
        assert_eq!(map.empty_buckets() + map.get_size(), map.get_capacity());
    }

    #[test]
    fn test_clear() {
        let mut map = OpenAddressingMap::with_capacity(11);
        map.put("key1", 1).unwrap();
        map.put("key2", 2).unwrap();
        map.remove("key1");

        map.clear();

        assert_eq!(map.get_size(), 0);
        assert!(map.is_empty());
        assert_eq!(map.get_capacity(), 11);
        assert_eq!(map.empty_buckets(), 11);
        assert_eq!(map.get("key2"), None);
    }

    #[test]
    fn test_resize_keeps_pairs_and_drops_tombstones() {
        let mut map = OpenAddressingMap::with_capacity(11);
        for key in 0..5u32 {
            map.put(key, key * 10).unwrap();
        }
        map.remove(&4);
        let before = sorted_pairs(&map);

        map.resize_table(100).unwrap();

        assert_eq!(map.get_capacity(), 101);
        assert_eq!(sorted_pairs(&map), before);
        assert_eq!(map.empty_buckets(), 101 - 4);
    }

    #[test]
    fn test_resize_below_size_is_noop() {
        let mut map = OpenAddressingMap::with_capacity(11);
        for key in 0..5u32 {
            map.put(key, ()).unwrap();
        }

        map.resize_table(4).unwrap();

        assert_eq!(map.get_capacity(), 11);
        assert_eq!(map.get_size(), 5);
    }

    #[test]
    fn test_undersized_resize_grows_during_rebuild() {
        let mut map = OpenAddressingMap::with_capacity(31);
        for key in 0..10u32 {
            map.put(key, key).unwrap();
        }

        map.resize_table(10).unwrap();

        assert!(is_prime(map.get_capacity()));
        assert!(map.get_capacity() > 11);
        assert_eq!(map.get_size(), 10);
        for key in 0..10u32 {
            assert_eq!(map.get(&key), Some(&key));
        }
    }

    #[test]
    fn test_load_stays_below_threshold() {
        let mut map = OpenAddressingMap::with_capacity(2);
        for key in 0..500u32 {
            map.put(key, key).unwrap();
            assert!(map.table_load() < MAX_LOAD_FACTOR, "load {} at {key}", map.table_load());
            assert!(is_prime(map.get_capacity()));
        }
    }

    #[test]
    fn test_get_mut() {
        let mut map = OpenAddressingMap::with_capacity(11);
        map.put("key1".to_string(), 1).unwrap();

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
        assert_eq!(map.get_mut("key2"), None);
    }

    #[test]
    fn test_iter_is_independent_and_restartable() {
        let map: OpenAddressingMap<u32, u32> = (0..8).map(|k| (k, k * k)).collect();

        let mut first = map.iter();
        let mut second = map.iter();
        first.next();
        assert_eq!(second.by_ref().count(), 8);
        assert_eq!(first.count(), 7);
        assert_eq!(second.next(), None);

        let sum: u32 = (&map).into_iter().map(|(_, v)| v).sum();
        assert_eq!(sum, (0..8).map(|k| k * k).sum());
    }

    #[test]
    fn test_iter_on_empty_map() {
        let map = OpenAddressingMap::<String, i32>::with_capacity(5);
        assert_eq!(map.iter().next(), None);
        assert!(map.get_keys_and_values().is_empty());
    }

    #[test]
    fn test_try_new_reports_overflow() {
        let err = OpenAddressingMap::<u32, u32>::try_new(usize::MAX, StdHasher).unwrap_err();
        assert_eq!(err, TableError::CapacityOverflow { requested: usize::MAX });
    }
}
