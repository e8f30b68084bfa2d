//! Mode finding on top of the shared map interface.

use std::hash::Hash;

use crate::{ChainingMap, HashMapOps, TableError};

/// Returns every most frequent value of `values` together with its frequency.
///
/// Ties are all reported, in the map's bucket order. An empty input yields no modes
/// and a frequency of `0`. Runs in linear time using a [`ChainingMap`] as the
/// frequency table.
///
/// ```rust
/// use primehash::find_mode;
///
/// let (mut modes, frequency) = find_mode(&["b", "a", "b", "a", "c"]).unwrap();
/// modes.sort_unstable();
/// assert_eq!(modes, vec!["a", "b"]);
/// assert_eq!(frequency, 2);
/// ```
///
/// # Errors
///
/// Returns [`TableError`] if the frequency table cannot grow.
pub fn find_mode<T>(values: &[T]) -> Result<(Vec<T>, usize), TableError>
where
    T: Hash + Eq + Clone,
{
    find_mode_with(ChainingMap::default(), values)
}

/// Like [`find_mode`], counting into the caller's `map`.
///
/// Only `put`, `get` and `contains_key` are used to build the table, so either map
/// variant, with any hasher, can serve.
///
/// # Errors
///
/// Returns [`TableError`] if the frequency table cannot grow.
pub fn find_mode_with<T, M>(mut map: M, values: &[T]) -> Result<(Vec<T>, usize), TableError>
where
    T: Clone,
    M: HashMapOps<T, usize>,
{
    for value in values {
        let count = if map.contains_key(value) {
            map.get(value).copied().unwrap_or_default().saturating_add(1)
        } else {
            1
        };
        map.put(value.clone(), count)?;
    }

    let pairs = map.get_keys_and_values();
    let frequency = pairs.iter().map(|&(_, &count)| count).max().unwrap_or(0);
    let modes = pairs
        .into_iter()
        .filter(|&(_, &count)| count == frequency)
        .map(|(value, _)| value.clone())
        .collect();

    Ok((modes, frequency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Additive, OpenAddressingMap};

    fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_single_mode() {
        let (modes, frequency) = find_mode(&[1, 2, 2, 3, 3, 3]).unwrap();
        assert_eq!(modes, vec![3]);
        assert_eq!(frequency, 3);
    }

    #[test]
    fn test_all_tied() {
        let (modes, frequency) = find_mode(&[1, 2, 3]).unwrap();
        assert_eq!(sorted(modes), vec![1, 2, 3]);
        assert_eq!(frequency, 1);
    }

    #[test]
    fn test_empty_input() {
        let (modes, frequency) = find_mode::<i32>(&[]).unwrap();
        assert!(modes.is_empty());
        assert_eq!(frequency, 0);
    }

    #[test]
    fn test_strings_through_open_addressing() {
        let words: Vec<String> = "apple grape melon peach apple grape apple kiwi grape"
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let (modes, frequency) = find_mode_with(OpenAddressingMap::new(5, Additive), &words).unwrap();

        assert_eq!(sorted(modes), vec!["apple".to_string(), "grape".to_string()]);
        assert_eq!(frequency, 3);
    }

    #[test]
    fn test_many_values_grow_the_table() {
        let values: Vec<u32> = (0..1_000).map(|i| i % 97).chain(std::iter::repeat_n(42, 5)).collect();

        let (modes, frequency) = find_mode(&values).unwrap();

        // residues below 30 appear 11 times, 42 appears 10 + 5 times
        assert_eq!(modes, vec![42]);
        assert_eq!(frequency, 15);
    }
}
