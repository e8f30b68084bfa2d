//! Singly linked key-value chain, one per bucket of a [`ChainingMap`](crate::ChainingMap).

use std::{borrow::Borrow, fmt};

/// A singly linked list of key-value pairs kept in insertion order.
///
/// Keys are expected to be unique; [`Chain::insert`] does not check, the owning map
/// does.
pub struct Chain<K, V> {
    /// First node, if any
    head: Option<Box<Node<K, V>>>,
    /// Number of nodes
    len: usize,
}

/// One link of a [`Chain`]
#[derive(Debug)]
struct Node<K, V> {
    /// The key
    key: K,
    /// The value
    value: V,
    /// The following node
    next: Option<Box<Node<K, V>>>,
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Chain<K, V> {
    /// Creates an empty chain; does not allocate
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of nodes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Shorthand for `self.len() == 0`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a node at the end of the chain
    pub fn insert(&mut self, key: K, value: V) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { key, value, next: None }));
        self.len = self.len.saturating_add(1);
    }

    /// Returns the value stored under `key`
    pub fn contains<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter().find_map(|(k, v)| (k.borrow() == key).then_some(v))
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn contains_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter_mut().find_map(|(k, v)| (k.borrow() == key).then_some(v))
    }

    /// Unlinks the node holding `key` and returns its pair
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key.borrow() != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.len = self.len.saturating_sub(1);

        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    /// Removes and returns the first pair
    fn pop_front(&mut self) -> Option<(K, V)> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len = self.len.saturating_sub(1);

        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    // [adapters]

    /// Returns an iterator over the pairs in insertion order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { current: self.head.as_deref(), remaining: self.len }
    }

    /// Returns an iterator over the pairs with mutable values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut { current: self.head.as_deref_mut(), remaining: self.len }
    }
}

impl<K, V> Drop for Chain<K, V> {
    fn drop(&mut self) {
        // unlink iteratively so long chains don't recurse through `Box` drops
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Chain<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Chain<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SLL [")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({key}: {value})")?;
        }
        write!(f, "]")
    }
}

impl<K, V> IntoIterator for Chain<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, K, V> IntoIterator for &'a Chain<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// [iterators]

/// Borrowing iterator over a [`Chain`]
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    /// Next node to yield
    current: Option<&'a Node<K, V>>,
    /// Nodes left
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { current: self.current, remaining: self.remaining }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Iterator over a [`Chain`] with mutable access to the values
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    /// Next node to yield
    current: Option<&'a mut Node<K, V>>,
    /// Nodes left
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref_mut();
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &mut node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Owning iterator over a [`Chain`], front to back
#[derive(Debug)]
pub struct IntoIter<K, V>(Chain<K, V>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}
