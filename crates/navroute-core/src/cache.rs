//! Fixed-capacity least-recently-used cache
//!
//! Entries live in a slab and form a doubly linked recency list through
//! slot indices; a hash index maps keys to slots. Every operation is O(1).

use crate::error::{Result, RouteError};
use std::collections::HashMap;
use std::hash::Hash;

/// Recency cache of chat id to last message
pub type ChatActivity = LruCache<u64, String>;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    capacity: usize,
    slots: Vec<Entry<K, V>>,
    index: HashMap<K, usize>,
    /// Most recently used
    head: Option<usize>,
    /// Least recently used
    tail: Option<usize>,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Create an empty cache; a capacity of zero is `InvalidCapacity`
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RouteError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Look up `key` and mark it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.move_to_front(slot);
        Some(&self.slots[slot].value)
    }

    /// Look up `key` without touching recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.slots[slot].value)
    }

    /// Insert or update `key` as most recently used.
    ///
    /// When a new key arrives at capacity the least recently used entry is
    /// evicted and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.index.get(&key) {
            self.slots[slot].value = value;
            self.move_to_front(slot);
            return None;
        }

        let entry = Entry {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        };

        if self.index.len() < self.capacity {
            let slot = self.slots.len();
            self.slots.push(entry);
            self.index.insert(key, slot);
            self.push_front(slot);
            return None;
        }

        // Full: reuse the least recently used slot
        let slot = self.tail?;
        self.unlink(slot);
        let evicted = std::mem::replace(&mut self.slots[slot], entry);
        self.index.remove(&evicted.key);
        self.index.insert(key, slot);
        self.push_front(slot);
        tracing::trace!(slot, "evicted least recently used entry");
        Some((evicted.key, evicted.value))
    }

    /// Keys ordered from most to least recently used
    pub fn keys_most_recent_first(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            keys.push(&self.slots[slot].key);
            cursor = self.slots[slot].next;
        }
        keys
    }

    fn move_to_front(&mut self, slot: usize) {
        if self.head == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.push_front(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.slots[slot].prev, self.slots[slot].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.slots[slot].prev = None;
        self.slots[slot].next = None;
    }

    fn push_front(&mut self, slot: usize) {
        self.slots[slot].prev = None;
        self.slots[slot].next = self.head;
        if let Some(h) = self.head {
            self.slots[h].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}
