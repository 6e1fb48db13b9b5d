// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered set backed by a [red-black tree](../rbtree/index.html).
//!
//! Values are kept in the ascending order of the set comparator, each value at most once. Adding a value equal to one already present leaves the stored value untouched.
//!
//! Binary operations (`intersection`, `union`, `difference`, `symmetric_difference` and the predicates `is_subset`, `is_proper_subset`, `is_disjoint`) are only meaningful between sets ordered the same way. Two sets are compatible when both use the natural order of `T`, or when their comparators are clones of the same [`Comparator::new`](../comparator/struct.Comparator.html#method.new) value. Two closures are never compared by behaviour: sets built from two distinct closures are incompatible even if the closures are identical. An operation on incompatible sets returns an empty set (ordered by the left operand comparator) and a predicate returns `false`.
//!
//! # Examples
//!
//! ```rust
//! use ordset::OrderedSet;
//! use ordset::ncollections::ops::*;
//!
//! let a = OrderedSet::from_values(vec![5, 3, 8, 1]);
//! let b = OrderedSet::from_values(vec![3, 4, 5]);
//! assert_eq!(a.values(), vec![1, 3, 5, 8]);
//! assert_eq!(a.intersection(&b).values(), vec![3, 5]);
//! assert_eq!((&a | &b).values(), vec![1, 3, 4, 5, 8]);
//! assert_eq!((a - b).values(), vec![1, 8]);
//! ```

use crate::comparator::Comparator;
use crate::cursor::TreeCursor;
use crate::error::InvariantResult;
use crate::ncollections::ops::*;
use crate::rbtree::{Keys, RbTree};
use log::debug;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

#[derive(Clone)]
pub struct OrderedSet<T>
{
  tree: RbTree<T, ()>
}

impl<T: Ord> OrderedSet<T>
{
  /// An empty set in the natural order of `T`.
  pub fn new() -> OrderedSet<T> {
    OrderedSet::with_comparator(Comparator::natural())
  }

  pub fn from_values<I>(values: I) -> OrderedSet<T> where
    I: IntoIterator<Item=T>
  {
    OrderedSet::from_values_with(Comparator::natural(), values)
  }
}

impl<T> OrderedSet<T>
{
  pub fn with_comparator(comparator: Comparator<T>) -> OrderedSet<T> {
    OrderedSet {
      tree: RbTree::with_comparator(comparator)
    }
  }

  pub fn from_values_with<I>(comparator: Comparator<T>, values: I) -> OrderedSet<T> where
    I: IntoIterator<Item=T>
  {
    let mut set = OrderedSet::with_comparator(comparator);
    set.add(values);
    set
  }

  pub fn comparator(&self) -> &Comparator<T> {
    self.tree.comparator()
  }

  /// Returns `true` if binary operations between `self` and `other` are defined.
  pub fn is_compatible(&self, other: &OrderedSet<T>) -> bool {
    self.comparator().same_as(other.comparator())
  }

  fn compatible_for(&self, other: &OrderedSet<T>, operation: &str) -> bool {
    let compatible = self.is_compatible(other);
    if !compatible {
      debug!("{} between ordered sets with different comparators ({:?} and {:?})",
        operation, self.comparator(), other.comparator());
    }
    compatible
  }

  fn empty_like(&self) -> OrderedSet<T> {
    OrderedSet::with_comparator(self.comparator().clone())
  }

  pub fn len(&self) -> usize {
    self.tree.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tree.is_empty()
  }

  pub fn clear(&mut self) {
    self.tree.clear();
  }

  /// Returns `true` if `value` was not already present.
  pub fn insert(&mut self, value: T) -> bool {
    self.tree.put_if_absent(value, ())
  }

  /// Inserts every item, items already present are ignored.
  pub fn add<I>(&mut self, items: I) where
    I: IntoIterator<Item=T>
  {
    for item in items {
      self.insert(item);
    }
  }

  /// Returns `true` if `value` was present.
  pub fn remove(&mut self, value: &T) -> bool {
    self.tree.remove(value).is_some()
  }

  /// Removes every item, absent items are ignored.
  pub fn remove_all<'b, I>(&mut self, items: I) where
    I: IntoIterator<Item=&'b T>,
    T: 'b
  {
    for item in items {
      self.remove(item);
    }
  }

  pub fn contains(&self, value: &T) -> bool {
    self.tree.contains_key(value)
  }

  /// Returns `true` if every item is present, in particular when there is no item.
  pub fn contains_all<'b, I>(&self, items: I) -> bool where
    I: IntoIterator<Item=&'b T>,
    T: 'b
  {
    items.into_iter().all(|item| self.contains(item))
  }

  /// The values in ascending order.
  pub fn values(&self) -> Vec<T> where
    T: Clone
  {
    self.iter().cloned().collect()
  }

  pub fn iter(&self) -> Iter<T> {
    Iter { inner: self.tree.keys() }
  }

  /// The smallest value.
  pub fn first(&self) -> Option<&T> {
    self.tree.min().map(|(value, _)| value)
  }

  /// The greatest value.
  pub fn last(&self) -> Option<&T> {
    self.tree.max().map(|(value, _)| value)
  }

  /// The greatest value less than or equal to `value`.
  pub fn floor(&self, value: &T) -> Option<&T> {
    self.tree.floor(value).map(|(value, _)| value)
  }

  /// The smallest value greater than or equal to `value`.
  pub fn ceiling(&self, value: &T) -> Option<&T> {
    self.tree.ceiling(value).map(|(value, _)| value)
  }

  /// A cursor positioned before the first value.
  pub fn cursor(&self) -> Cursor<T> {
    Cursor {
      inner: self.tree.cursor(),
      index: -1,
      len: self.len() as isize
    }
  }

  pub fn check_invariants(&self) -> InvariantResult {
    self.tree.check_invariants()
  }
}

impl<T: Ord> Default for OrderedSet<T>
{
  fn default() -> OrderedSet<T> {
    OrderedSet::new()
  }
}

/// Two sets are equal if they hold the same number of values and their values are pairwise equal, in order, under the comparator of the left set.
impl<T> PartialEq for OrderedSet<T>
{
  fn eq(&self, other: &OrderedSet<T>) -> bool {
    self.len() == other.len() &&
    self.iter().zip(other.iter())
      .all(|(a, b)| self.comparator().compare(a, b) == Ordering::Equal)
  }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T>
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

impl<T: Display> Display for OrderedSet<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.write_str("TreeSet\n")?;
    let mut values = self.iter();
    if let Some(value) = values.next() {
      write!(formatter, "{}", value)?;
      for value in values {
        write!(formatter, ", {}", value)?;
      }
    }
    Ok(())
  }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T>
{
  fn from_iter<I>(iterable: I) -> OrderedSet<T> where
   I: IntoIterator<Item=T>
  {
    OrderedSet::from_values(iterable)
  }
}

impl<T> Extend<T> for OrderedSet<T>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=T>
  {
    self.add(iterable);
  }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T>
{
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T: Serialize> Serialize for OrderedSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    serializer.collect_seq(self.iter())
  }
}

impl<'de, T> Deserialize<'de> for OrderedSet<T> where
  T: Deserialize<'de> + Ord
{
  fn deserialize<D>(deserializer: D) -> Result<OrderedSet<T>, D::Error> where
    D: Deserializer<'de>
  {
    Vec::<T>::deserialize(deserializer).map(OrderedSet::from_values)
  }
}

/// Values of a set in ascending order, from both ends.
pub struct Iter<'a, T>
{
  inner: Keys<'a, T, ()>
}

impl<'a, T> Clone for Iter<'a, T>
{
  fn clone(&self) -> Iter<'a, T> {
    Iter { inner: self.inner.clone() }
  }
}

impl<'a, T> Iterator for Iter<'a, T>
{
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T>
{
  fn next_back(&mut self) -> Option<&'a T> {
    self.inner.next_back()
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Cursor over the values of a set that also tracks the position of the current value.
///
/// The index is `-1` before the first value, `len()` past the last one, and the 0-based rank of the current value otherwise.
pub struct Cursor<'a, T>
{
  inner: TreeCursor<'a, T, ()>,
  index: isize,
  len: isize
}

impl<'a, T> Clone for Cursor<'a, T>
{
  fn clone(&self) -> Cursor<'a, T> {
    Cursor {
      inner: self.inner.clone(),
      index: self.index,
      len: self.len
    }
  }
}

impl<'a, T> Cursor<'a, T>
{
  /// Moves to the next value. Returns `false` when the cursor moves past the last value.
  pub fn next(&mut self) -> bool {
    if self.inner.next() {
      self.index += 1;
      true
    }
    else {
      self.index = self.len;
      false
    }
  }

  /// Moves to the previous value. Returns `false` when the cursor moves before the first value.
  pub fn prev(&mut self) -> bool {
    if self.inner.prev() {
      self.index -= 1;
      true
    }
    else {
      self.index = -1;
      false
    }
  }

  /// The current value, `None` before the first or past the last value.
  pub fn value(&self) -> Option<&'a T> {
    self.inner.key()
  }

  pub fn index(&self) -> isize {
    self.index
  }

  pub fn begin(&mut self) {
    self.inner.begin();
    self.index = -1;
  }

  pub fn end(&mut self) {
    self.inner.end();
    self.index = self.len;
  }

  pub fn first(&mut self) -> bool {
    self.begin();
    self.next()
  }

  pub fn last(&mut self) -> bool {
    self.end();
    self.prev()
  }

  /// Advances until `predicate` holds on the index and value of the current position.
  pub fn next_to<P>(&mut self, mut predicate: P) -> bool where
    P: FnMut(usize, &'a T) -> bool
  {
    while self.next() {
      if let Some(value) = self.value() {
        if predicate(self.index as usize, value) {
          return true;
        }
      }
    }
    false
  }

  /// Moves backward until `predicate` holds on the index and value of the current position.
  pub fn prev_to<P>(&mut self, mut predicate: P) -> bool where
    P: FnMut(usize, &'a T) -> bool
  {
    while self.prev() {
      if let Some(value) = self.value() {
        if predicate(self.index as usize, value) {
          return true;
        }
      }
    }
    false
  }
}

impl<T: Clone> Intersection for OrderedSet<T>
{
  type Output = OrderedSet<T>;

  fn intersection(&self, other: &OrderedSet<T>) -> OrderedSet<T> {
    let mut result = self.empty_like();
    if self.compatible_for(other, "intersection") {
      let (small, large) =
        if self.len() <= other.len() { (self, other) }
        else { (other, self) };
      result.add(small.iter().filter(|value| large.contains(value)).cloned());
    }
    result
  }
}

impl<T: Clone> Union for OrderedSet<T>
{
  type Output = OrderedSet<T>;

  fn union(&self, other: &OrderedSet<T>) -> OrderedSet<T> {
    if !self.compatible_for(other, "union") {
      return self.empty_like();
    }
    let mut result = self.clone();
    result.add(other.iter().cloned());
    result
  }
}

impl<T: Clone> Difference for OrderedSet<T>
{
  type Output = OrderedSet<T>;

  fn difference(&self, other: &OrderedSet<T>) -> OrderedSet<T> {
    let mut result = self.empty_like();
    if self.compatible_for(other, "difference") {
      result.add(self.iter().filter(|value| !other.contains(value)).cloned());
    }
    result
  }
}

impl<T: Clone> SymmetricDifference for OrderedSet<T>
{
  type Output = OrderedSet<T>;

  fn symmetric_difference(&self, other: &OrderedSet<T>) -> OrderedSet<T> {
    let mut result = self.empty_like();
    if self.compatible_for(other, "symmetric difference") {
      result.add(self.iter().filter(|value| !other.contains(value)).cloned());
      result.add(other.iter().filter(|value| !self.contains(value)).cloned());
    }
    result
  }
}

set_operator_impl!(impl<T: + Clone> BitAnd for OrderedSet<T>, bitand => Intersection::intersection);
set_operator_impl!(impl<T: + Clone> BitOr for OrderedSet<T>, bitor => Union::union);
set_operator_impl!(impl<T: + Clone> Sub for OrderedSet<T>, sub => Difference::difference);
set_operator_impl!(impl<T: + Clone> BitXor for OrderedSet<T>, bitxor => SymmetricDifference::symmetric_difference);

impl<T> Contains<T> for OrderedSet<T>
{
  fn contains(&self, value: &T) -> bool {
    self.tree.contains_key(value)
  }
}

impl<T> Disjoint for OrderedSet<T>
{
  fn is_disjoint(&self, other: &OrderedSet<T>) -> bool {
    self.compatible_for(other, "disjointness test") &&
    self.iter().all(|value| !other.contains(value))
  }
}

impl<T> Subset for OrderedSet<T>
{
  fn is_subset(&self, other: &OrderedSet<T>) -> bool {
    self.compatible_for(other, "subset test") &&
    self.len() <= other.len() &&
    self.iter().all(|value| other.contains(value))
  }
}

impl<T> ProperSubset for OrderedSet<T>
{
  fn is_proper_subset(&self, other: &OrderedSet<T>) -> bool {
    self.len() < other.len() && self.is_subset(other)
  }
}

impl<T> Cardinality for OrderedSet<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.len()
  }
}

impl<T: Ord> Empty for OrderedSet<T>
{
  fn empty() -> OrderedSet<T> {
    OrderedSet::new()
  }
}

impl<T: Ord> Singleton<T> for OrderedSet<T>
{
  fn singleton(value: T) -> OrderedSet<T> {
    let mut set = OrderedSet::new();
    set.insert(value);
    set
  }
}
