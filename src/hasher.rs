//! Pluggable hash functions.
//!
//! A map takes its hash function at construction as a [`KeyHasher`] value. Swapping
//! hashers changes how keys cluster across buckets, never which keys are found.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Capability that maps a key to a bucket-independent hash value.
///
/// A hasher used with keys of type `K` that are looked up through `Q` (where
/// `K: Borrow<Q>`) must produce the same value for a `K` and the `Q` it borrows as.
///
/// Any `Fn(&Q) -> u64` implements this trait, which makes fixed hashes easy to inject
/// in tests:
///
/// ```rust
/// use primehash::OpenAddressingMap;
///
/// let mut map: OpenAddressingMap<u32, &str, _> = OpenAddressingMap::new(11, |key: &u32| u64::from(*key));
/// map.put(7, "seven").unwrap();
/// assert_eq!(map.get(&7), Some(&"seven"));
/// ```
pub trait KeyHasher<Q: ?Sized> {
    /// Hashes `key`
    fn hash_key(&self, key: &Q) -> u64;
}

impl<Q: ?Sized, F> KeyHasher<Q> for F
where
    F: Fn(&Q) -> u64,
{
    fn hash_key(&self, key: &Q) -> u64 {
        self(key)
    }
}

/// Sum of the character codes of a string key.
///
/// Anagrams collide, so keys cluster heavily; useful for exercising collision paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

impl<Q: AsRef<str> + ?Sized> KeyHasher<Q> for Additive {
    fn hash_key(&self, key: &Q) -> u64 {
        key.as_ref().chars().fold(0u64, |hash, c| hash.wrapping_add(u64::from(c)))
    }
}

/// Sum of each character code weighted by its one-based position.
///
/// Same cost as [`Additive`] but distinguishes anagrams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positional;

impl<Q: AsRef<str> + ?Sized> KeyHasher<Q> for Positional {
    fn hash_key(&self, key: &Q) -> u64 {
        key.as_ref()
            .chars()
            .zip(1u64..)
            .fold(0u64, |hash, (c, position)| hash.wrapping_add(position.wrapping_mul(u64::from(c))))
    }
}

/// The standard library's `DefaultHasher` over any `Hash` key.
///
/// This is the default for maps built without an explicit hasher, and the only
/// reference hasher that accepts keys which are not strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdHasher;

impl<Q: Hash + ?Sized> KeyHasher<Q> for StdHasher {
    fn hash_key(&self, key: &Q) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}
