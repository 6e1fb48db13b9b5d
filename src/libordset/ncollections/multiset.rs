// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unordered multiset of hashable values.
//!
//! Every distinct value is mapped to its number of occurrences, which is never zero: removing the last occurrence of a value removes its entry. The total number of occurrences is maintained alongside, so `len()` is `O(1)`.
//!
//! # Examples
//!
//! ```rust
//! use ordset::HashMultiset;
//!
//! let mut bag = HashMultiset::new();
//! bag.add(vec![2, 2, 3]);
//! assert_eq!(bag.count(&2), 2);
//! assert_eq!(bag.len(), 3);
//! bag.remove(&2);
//! assert_eq!(bag.count(&2), 1);
//! bag.remove_all(&2);
//! assert_eq!(bag.count(&2), 0);
//! assert_eq!(bag.len(), 1);
//! ```

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

#[derive(Clone)]
pub struct HashMultiset<T, S = RandomState>
{
  counts: HashMap<T, usize, S>,
  len: usize
}

impl<T: Eq + Hash> HashMultiset<T, RandomState>
{
  pub fn new() -> HashMultiset<T, RandomState> {
    HashMultiset::default()
  }

  pub fn from_values<I>(values: I) -> HashMultiset<T, RandomState> where
    I: IntoIterator<Item=T>
  {
    values.into_iter().collect()
  }
}

impl<T, S> HashMultiset<T, S>
{
  /// Total number of occurrences.
  pub fn len(&self) -> usize {
    self.len
  }

  /// Number of distinct values.
  pub fn unique_len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn clear(&mut self) {
    self.counts.clear();
    self.len = 0;
  }

  /// Distinct values with their number of occurrences, in an unspecified order.
  pub fn iter(&self) -> impl Iterator<Item=(&T, usize)> + '_ {
    self.counts.iter().map(|(value, &count)| (value, count))
  }
}

impl<T, S> HashMultiset<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  pub fn with_hasher(hasher: S) -> HashMultiset<T, S> {
    HashMultiset {
      counts: HashMap::with_hasher(hasher),
      len: 0
    }
  }

  /// Adds one occurrence of `value`.
  pub fn insert(&mut self, value: T) {
    *self.counts.entry(value).or_insert(0) += 1;
    self.len += 1;
  }

  /// Adds one occurrence of each item.
  pub fn add<I>(&mut self, items: I) where
    I: IntoIterator<Item=T>
  {
    for item in items {
      self.insert(item);
    }
  }

  /// Removes one occurrence of `value`. Returns `false` if `value` was absent.
  pub fn remove(&mut self, value: &T) -> bool {
    let remaining = match self.counts.get_mut(value) {
      Some(count) => {
        *count -= 1;
        *count
      }
      None => return false
    };
    if remaining == 0 {
      self.counts.remove(value);
    }
    self.len -= 1;
    true
  }

  /// Removes every occurrence of `value` and returns how many there were.
  pub fn remove_all(&mut self, value: &T) -> usize {
    let count = self.counts.remove(value).unwrap_or(0);
    self.len -= count;
    count
  }

  pub fn count(&self, value: &T) -> usize {
    self.counts.get(value).cloned().unwrap_or(0)
  }

  pub fn contains(&self, value: &T) -> bool {
    self.counts.contains_key(value)
  }

  /// Each distinct value once, in an unspecified order.
  pub fn unique_values(&self) -> Vec<T> where
    T: Clone
  {
    self.counts.keys().cloned().collect()
  }

  /// Each value repeated as many times as it occurs, equal values being adjacent.
  pub fn all_values(&self) -> Vec<T> where
    T: Clone
  {
    let mut values = Vec::with_capacity(self.len);
    for (value, &count) in &self.counts {
      values.extend(std::iter::repeat(value).take(count).cloned());
    }
    values
  }
}

impl<T, S: Default> Default for HashMultiset<T, S>
{
  fn default() -> HashMultiset<T, S> {
    HashMultiset {
      counts: HashMap::default(),
      len: 0
    }
  }
}

impl<T, S> PartialEq for HashMultiset<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn eq(&self, other: &HashMultiset<T, S>) -> bool {
    self.len == other.len && self.counts == other.counts
  }
}

impl<T, S> Eq for HashMultiset<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{}

impl<T: fmt::Debug, S> fmt::Debug for HashMultiset<T, S>
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_map().entries(self.counts.iter()).finish()
  }
}

impl<T, S> FromIterator<T> for HashMultiset<T, S> where
  T: Eq + Hash,
  S: BuildHasher + Default
{
  fn from_iter<I>(iterable: I) -> HashMultiset<T, S> where
   I: IntoIterator<Item=T>
  {
    let mut multiset = HashMultiset::default();
    multiset.add(iterable);
    multiset
  }
}

impl<T, S> Extend<T> for HashMultiset<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=T>
  {
    self.add(iterable);
  }
}

impl<T, S> Serialize for HashMultiset<T, S> where
  T: Serialize
{
  fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> where
    Ser: Serializer
  {
    serializer.collect_map(self.counts.iter())
  }
}

impl<'de, T, S> Deserialize<'de> for HashMultiset<T, S> where
  T: Deserialize<'de> + Eq + Hash,
  S: BuildHasher + Default
{
  fn deserialize<D>(deserializer: D) -> Result<HashMultiset<T, S>, D::Error> where
    D: Deserializer<'de>
  {
    let counts = HashMap::<T, usize, S>::deserialize(deserializer)?;
    if counts.values().any(|&count| count == 0) {
      return Err(de::Error::custom("a multiset cannot hold a value zero times"));
    }
    let len = counts.values()
      .try_fold(0usize, |total, &count| total.checked_add(count))
      .ok_or_else(|| <D::Error as de::Error>::custom("the total number of occurrences overflows"))?;
    Ok(HashMultiset {
      counts: counts,
      len: len
    })
  }
}
