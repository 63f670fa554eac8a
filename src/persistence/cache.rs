// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-capacity key/value cache with least-recently-used eviction.
//!
//! Entries live in a slab (`Vec`) and are threaded on a doubly linked
//! recency list by index, so lookups, inserts and evictions are O(1).
//! Once full, inserting a new key recycles the slot of the least recently
//! used entry.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    /// Neighbour towards the most recently used end.
    prev: Option<usize>,
    /// Neighbour towards the least recently used end.
    next: Option<usize>,
}

/// Capacity-bounded mapping evicting the least recently used entry.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    index: HashMap<K, usize>,
    entries: Vec<Entry<K, V>>,
    /// Most recently used slot.
    head: Option<usize>,
    /// Least recently used slot.
    tail: Option<usize>,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    /// Create an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 gives a cache that never stores anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, marking it as most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.touch(slot);
        Some(&self.entries[slot].value)
    }

    /// Check for `key` without changing recency.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or replace `key`, evicting the least recently used entry if full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].value = value;
            self.touch(slot);
            return;
        }
        if self.entries.len() < self.capacity {
            let slot = self.entries.len();
            self.entries.push(Entry {
                key: key.clone(),
                value,
                prev: None,
                next: None,
            });
            self.push_front(slot);
            self.index.insert(key, slot);
            return;
        }
        // Full: recycle the least recently used slot.
        if let Some(slot) = self.tail {
            self.unlink(slot);
            self.index.remove(&self.entries[slot].key);
            let entry = &mut self.entries[slot];
            entry.key = key.clone();
            entry.value = value;
            self.push_front(slot);
            self.index.insert(key, slot);
        }
    }

    fn touch(&mut self, slot: usize) {
        if self.head != Some(slot) {
            self.unlink(slot);
            self.push_front(slot);
        }
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.entries[slot].prev, self.entries[slot].next);
        match prev {
            Some(p) => self.entries[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entries[n].prev = prev,
            None => self.tail = prev,
        }
        self.entries[slot].prev = None;
        self.entries[slot].next = None;
    }

    fn push_front(&mut self, slot: usize) {
        self.entries[slot].next = self.head;
        self.entries[slot].prev = None;
        if let Some(h) = self.head {
            self.entries[h].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}
