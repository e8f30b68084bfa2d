//! # Prime Hash
//!
//! Hash maps over prime-length bucket arrays, built from scratch.
//!
//! This crate provides two hash map implementations with the same operations:
//!
//! - `OpenAddressingMap`: quadratic probing with tombstones for deleted entries,
//!   kept below a load factor of 0.5
//! - `ChainingMap`: separate chaining with one singly linked chain per bucket, kept
//!   below a load factor of 1.0
//!
//! Both take their hash function at construction (see [`KeyHasher`]), round every
//! requested capacity up to a prime, and grow to the next prime after twice their
//! capacity when an insertion would reach their load threshold. The [`HashMapOps`]
//! trait lets clients such as [`find_mode`] work with either one.
//!
//! ## Basic Usage
//!
//! ```rust
//! use primehash::{Additive, OpenAddressingMap};
//!
//! // Capacity is rounded up to the next prime
//! let mut map = OpenAddressingMap::new(10, Additive);
//! assert_eq!(map.get_capacity(), 11);
//!
//! // Insert values
//! map.put("apple".to_string(), 1).unwrap();
//! map.put("banana".to_string(), 2).unwrap();
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple".to_string(), 10).unwrap();
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! assert_eq!(map.get_size(), 1);
//! ```
//!
//! ## Separate Chaining
//!
//! ```rust
//! use primehash::{ChainingMap, Positional};
//!
//! let mut map = ChainingMap::new(3, Positional);
//! for word in ["one", "two", "three", "four"] {
//!     map.put(word, word.len()).unwrap();
//! }
//!
//! // Four entries never share three buckets: the table grew first
//! assert_eq!(map.get_capacity(), 7);
//! assert!(map.table_load() < 1.0);
//! assert_eq!(map.get("three"), Some(&5));
//! ```

/// Singly linked chains used as buckets by the chaining map
pub mod chain;
/// Hash map with one chain per bucket
pub mod chaining;
/// Error type for table rebuilds
mod error;
/// Pluggable hash functions
mod hasher;
/// Mode finding built on the shared map interface
mod mode;
/// Hash map with quadratic probing and tombstones
pub mod open_addressing;
/// Prime capacity helpers
pub mod prime;
/// The shared map trait and bucket allocation
mod utils;

pub use chaining::ChainingMap;
pub use error::TableError;
pub use hasher::{Additive, KeyHasher, Positional, StdHasher};
pub use mode::{find_mode, find_mode_with};
pub use open_addressing::OpenAddressingMap;
pub use utils::HashMapOps;
