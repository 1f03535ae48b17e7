//! Separate-chaining hash map from `i32` keys to owned strings.
//!
//! Keys hash to `key mod bucket_count` (Euclidean, so negative keys land in
//! range). New keys are linked at the head of their chain. Once the entry
//! count reaches 70% of the bucket count the table doubles and every entry is
//! relinked into the new table.

use crate::growth::{Trigger, check_capacity};
use crate::{Error, Result};

#[derive(Debug)]
struct Entry {
    key: i32,
    value: String,
    next: Link,
}

type Link = Option<Box<Entry>>;

/// Bucketed hash map with upsert semantics.
///
/// # Example
///
/// ```
/// use strata_collections::BucketedHashMap;
///
/// let mut map = BucketedHashMap::with_buckets(4).unwrap();
/// map.insert(1, "one").unwrap();
/// map.insert(1, "uno").unwrap();
/// map.insert(-3, "minus three").unwrap();
///
/// assert_eq!(map.get(1), Some("uno"));
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.delete(1), Some("uno".to_string()));
/// assert_eq!(map.get(1), None);
/// ```
#[derive(Debug)]
pub struct BucketedHashMap {
    buckets: Vec<Link>,
    len: usize,
}

impl BucketedHashMap {
    /// Creates an empty map with `bucket_count` chains.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `bucket_count` is 0, or
    /// [`Error::AllocationFailure`] if the bucket table cannot be reserved.
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        check_capacity(bucket_count)?;
        Ok(Self {
            buckets: empty_buckets(bucket_count)?,
            len: 0,
        })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chains in the table.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts `value` under `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if a new key needed the table to grow and
    /// the new table could not be reserved. The map is unchanged.
    pub fn insert(&mut self, key: i32, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if let Some(entry) = self.entry_mut(key) {
            entry.value = value;
            return Ok(());
        }

        if Trigger::AtLoadFactor.should_grow(self.len + 1, self.buckets.len()) {
            self.rehash()?;
        }
        self.link(Box::new(Entry {
            key,
            value,
            next: None,
        }));
        Ok(())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: i32) -> Option<&str> {
        let mut cursor = self.buckets[self.slot(key)].as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value. A missing key is a no-op.
    pub fn delete(&mut self, key: i32) -> Option<String> {
        let slot = self.slot(key);
        let mut cursor = &mut self.buckets[slot];
        while cursor.as_ref().is_some_and(|entry| entry.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    #[inline]
    fn slot(&self, key: i32) -> usize {
        // bucket_count > 0 is enforced at construction
        (i64::from(key).rem_euclid(self.buckets.len() as i64)) as usize
    }

    fn entry_mut(&mut self, key: i32) -> Option<&mut Entry> {
        let slot = self.slot(key);
        let mut cursor = self.buckets[slot].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(entry);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    fn link(&mut self, mut entry: Box<Entry>) {
        let slot = self.slot(entry.key);
        entry.next = self.buckets[slot].take();
        self.buckets[slot] = Some(entry);
        self.len += 1;
    }

    /// Doubles the bucket count and relinks every entry.
    fn rehash(&mut self) -> Result<()> {
        let new_count = self.buckets.len().saturating_mul(2);
        let fresh = empty_buckets(new_count)?;
        let old = std::mem::replace(&mut self.buckets, fresh);
        self.len = 0;
        for mut chain in old {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                self.link(entry);
            }
        }
        Ok(())
    }
}

impl Default for BucketedHashMap {
    fn default() -> Self {
        let mut buckets = Vec::with_capacity(crate::growth::DEFAULT_CAPACITY);
        buckets.resize_with(crate::growth::DEFAULT_CAPACITY, || None);
        Self { buckets, len: 0 }
    }
}

impl Drop for BucketedHashMap {
    fn drop(&mut self) {
        // Unlink chains iteratively so a long chain cannot overflow the stack.
        for bucket in &mut self.buckets {
            let mut cursor = bucket.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
        }
    }
}

fn empty_buckets(count: usize) -> Result<Vec<Link>> {
    let mut buckets = Vec::new();
    buckets
        .try_reserve_exact(count)
        .map_err(|e| Error::alloc(count, e))?;
    buckets.resize_with(count, || None);
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_keys(map: &BucketedHashMap, slot: usize) -> Vec<i32> {
        let mut keys = Vec::new();
        let mut cursor = map.buckets[slot].as_deref();
        while let Some(entry) = cursor {
            keys.push(entry.key);
            cursor = entry.next.as_deref();
        }
        keys
    }

    #[test]
    fn zero_buckets_rejected() {
        assert!(matches!(
            BucketedHashMap::with_buckets(0),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn insert_get() {
        let mut map = BucketedHashMap::with_buckets(10).unwrap();
        map.insert(1, "one").unwrap();
        map.insert(2, "two").unwrap();
        assert_eq!(map.get(1), Some("one"));
        assert_eq!(map.get(2), Some("two"));
        assert_eq!(map.get(3), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn upsert_keeps_count() {
        let mut map = BucketedHashMap::with_buckets(10).unwrap();
        map.insert(5, "a").unwrap();
        map.insert(5, "b").unwrap();
        assert_eq!(map.get(5), Some("b"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn collisions_prepend() {
        let mut map = BucketedHashMap::with_buckets(10).unwrap();
        map.insert(3, "a").unwrap();
        map.insert(13, "b").unwrap();
        map.insert(23, "c").unwrap();
        assert_eq!(chain_keys(&map, 3), vec![23, 13, 3]);
        assert_eq!(map.get(13), Some("b"));
    }

    #[test]
    fn delete_head_interior_tail() {
        let mut map = BucketedHashMap::with_buckets(10).unwrap();
        for (k, v) in [(3, "a"), (13, "b"), (23, "c"), (33, "d")] {
            map.insert(k, v).unwrap();
        }
        // chain: 33, 23, 13, 3
        assert_eq!(map.delete(33), Some("d".to_string()));
        assert_eq!(map.delete(13), Some("b".to_string()));
        assert_eq!(map.delete(3), Some("a".to_string()));
        assert_eq!(chain_keys(&map, 3), vec![23]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut map = BucketedHashMap::with_buckets(10).unwrap();
        map.insert(1, "one").unwrap();
        assert_eq!(map.delete(11), None);
        assert_eq!(map.delete(2), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn rehash_at_load_factor() {
        let mut map = BucketedHashMap::with_buckets(10).unwrap();
        for k in 0..6 {
            map.insert(k, k.to_string()).unwrap();
        }
        assert_eq!(map.bucket_count(), 10);
        map.insert(6, "6").unwrap();
        assert_eq!(map.bucket_count(), 20);
        assert_eq!(map.len(), 7);
        for k in 0..7 {
            assert_eq!(map.get(k), Some(k.to_string().as_str()));
        }
    }

    #[test]
    fn rehash_places_keys_in_their_slot() {
        let mut map = BucketedHashMap::with_buckets(2).unwrap();
        for k in 0..50 {
            map.insert(k, "x").unwrap();
        }
        let buckets = map.bucket_count();
        for slot in 0..buckets {
            for key in chain_keys(&map, slot) {
                assert_eq!(key.rem_euclid(buckets as i32) as usize, slot);
            }
        }
    }

    #[test]
    fn negative_keys() {
        let mut map = BucketedHashMap::with_buckets(7).unwrap();
        map.insert(-1, "m1").unwrap();
        map.insert(i32::MIN, "min").unwrap();
        assert_eq!(map.get(-1), Some("m1"));
        assert_eq!(map.get(i32::MIN), Some("min"));
        assert_eq!(chain_keys(&map, 6), vec![-1]);
    }

    #[test]
    fn upsert_at_threshold_does_not_rehash() {
        let mut map = BucketedHashMap::with_buckets(10).unwrap();
        for k in 0..6 {
            map.insert(k, "v").unwrap();
        }
        map.insert(0, "w").unwrap();
        assert_eq!(map.bucket_count(), 10);
    }

    #[test]
    fn contains_key_tracks_delete() {
        let mut map = BucketedHashMap::default();
        map.insert(4, "four").unwrap();
        assert!(map.contains_key(4));
        map.delete(4);
        assert!(!map.contains_key(4));
        assert!(map.is_empty());
    }
}
