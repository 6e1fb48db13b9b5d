// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unordered set of hashable values.
//!
//! Iteration order is unspecified. Set operations come from the [generic operations](../ops/index.html) and from the `&`, `|`, `-` and `^` operators.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::hash_map::RandomState;
use std::collections::HashSet as StdHashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

#[derive(Clone)]
pub struct HashSet<T, S = RandomState>
{
  hs: StdHashSet<T, S>
}

impl<T: Eq + Hash> HashSet<T, RandomState>
{
  pub fn new() -> HashSet<T, RandomState> {
    HashSet::wrap(StdHashSet::new())
  }

  /// An empty set able to hold `capacity` values without reallocating.
  pub fn with_capacity(capacity: usize) -> HashSet<T, RandomState> {
    HashSet::wrap(StdHashSet::with_capacity(capacity))
  }

  pub fn from_values<I>(values: I) -> HashSet<T, RandomState> where
    I: IntoIterator<Item=T>
  {
    values.into_iter().collect()
  }
}

impl<T, S> HashSet<T, S>
{
  pub fn wrap(hs: StdHashSet<T, S>) -> HashSet<T, S> {
    HashSet{hs: hs}
  }

  pub fn unwrap(self) -> StdHashSet<T, S> {
    self.hs
  }

  pub fn as_std(&self) -> &StdHashSet<T, S> {
    &self.hs
  }

  pub fn len(&self) -> usize {
    self.hs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hs.is_empty()
  }

  pub fn clear(&mut self) {
    self.hs.clear();
  }
}

impl<T, S> HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  pub fn with_hasher(hasher: S) -> HashSet<T, S> {
    HashSet::wrap(StdHashSet::with_hasher(hasher))
  }

  /// Returns `true` if `value` was not present.
  pub fn insert(&mut self, value: T) -> bool {
    self.hs.insert(value)
  }

  /// Inserts every item, duplicates are ignored.
  pub fn add<I>(&mut self, items: I) where
    I: IntoIterator<Item=T>
  {
    self.hs.extend(items);
  }

  /// Returns `true` if `value` was present.
  pub fn remove(&mut self, value: &T) -> bool {
    self.hs.remove(value)
  }

  pub fn contains(&self, value: &T) -> bool {
    self.hs.contains(value)
  }

  /// The values in an unspecified order.
  pub fn values(&self) -> Vec<T> where
    T: Clone
  {
    self.hs.iter().cloned().collect()
  }
}

impl<T, S> Deref for HashSet<T, S>
{
  type Target = StdHashSet<T, S>;

  fn deref<'a>(&'a self) -> &'a StdHashSet<T, S> {
    &self.hs
  }
}

impl<T, S> DerefMut for HashSet<T, S>
{
  fn deref_mut<'a>(&'a mut self) -> &'a mut StdHashSet<T, S> {
    &mut self.hs
  }
}

impl<T, S: Default> Default for HashSet<T, S>
{
  fn default() -> HashSet<T, S> {
    HashSet::wrap(StdHashSet::default())
  }
}

impl<T, S> PartialEq for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn eq(&self, other: &HashSet<T, S>) -> bool {
    self.hs == other.hs
  }
}

impl<T, S> Eq for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{}

impl<T: fmt::Debug, S> fmt::Debug for HashSet<T, S>
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Debug::fmt(&self.hs, f)
  }
}

impl<T, S> FromIterator<T> for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher + Default
{
  fn from_iter<I>(iterable: I) -> HashSet<T, S> where
   I: IntoIterator<Item=T>
  {
    HashSet::wrap(StdHashSet::from_iter(iterable))
  }
}

impl<T, S> Extend<T> for HashSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=T>
  {
    self.hs.extend(iterable);
  }
}

impl<T, S> Serialize for HashSet<T, S> where
  T: Serialize
{
  fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> where
    Ser: Serializer
  {
    serializer.collect_seq(self.hs.iter())
  }
}

impl<'de, T, S> Deserialize<'de> for HashSet<T, S> where
  T: Deserialize<'de> + Eq + Hash,
  S: BuildHasher + Default
{
  fn deserialize<D>(deserializer: D) -> Result<HashSet<T, S>, D::Error> where
    D: Deserializer<'de>
  {
    StdHashSet::deserialize(deserializer).map(HashSet::wrap)
  }
}
