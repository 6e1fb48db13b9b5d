// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generic operations on collection of elements.
//!
//! For general informations, see the [module documentation](../index.html).

use crate::ncollections::{HashMultiset, HashSet};
use num_traits::{One, Unsigned, Zero};
use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

// Basic set operations

pub trait Intersection<RHS = Self> {
  type Output;
  fn intersection(&self, rhs: &RHS) -> Self::Output;
}

pub trait Union<RHS = Self> {
  type Output;
  fn union(&self, rhs: &RHS) -> Self::Output;
}

pub trait Difference<RHS = Self> {
  type Output;
  fn difference(&self, rhs: &RHS) -> Self::Output;
}

pub trait SymmetricDifference<RHS = Self> {
  type Output;
  fn symmetric_difference(&self, rhs: &RHS) -> Self::Output;
}

macro_rules! set_op_impl
{
  ( $( $t: ident, $m:ident );* ) =>
  {$(
    impl<T, S> $t for HashSet<T, S>
    where T: Eq + Hash + Clone,
          S: BuildHasher + Default
    {
      type Output = HashSet<T, S>;

      fn $m(&self, other: &HashSet<T, S>) -> HashSet<T, S> {
        HashSet::wrap(self.as_std().$m(other.as_std()).cloned().collect())
      }
    }
  )*}
}

set_op_impl! {
  Intersection, intersection;
  Union, union;
  Difference, difference;
  SymmetricDifference, symmetric_difference
}

set_operator_impl!(impl<T: + Eq + Hash + Clone, S: + BuildHasher + Default> BitAnd for HashSet<T, S>, bitand => Intersection::intersection);
set_operator_impl!(impl<T: + Eq + Hash + Clone, S: + BuildHasher + Default> BitOr for HashSet<T, S>, bitor => Union::union);
set_operator_impl!(impl<T: + Eq + Hash + Clone, S: + BuildHasher + Default> Sub for HashSet<T, S>, sub => Difference::difference);
set_operator_impl!(impl<T: + Eq + Hash + Clone, S: + BuildHasher + Default> BitXor for HashSet<T, S>, bitxor => SymmetricDifference::symmetric_difference);

// Membership

pub trait Contains<Item> {
  fn contains(&self, value: &Item) -> bool;
}

impl<T, S> Contains<T> for HashSet<T, S>
where T: Eq + Hash,
      S: BuildHasher
{
  fn contains(&self, value: &T) -> bool {
    self.as_std().contains(value)
  }
}

impl<T, S> Contains<T> for HashMultiset<T, S>
where T: Eq + Hash,
      S: BuildHasher
{
  fn contains(&self, value: &T) -> bool {
    self.count(value) > 0
  }
}

pub trait Disjoint<RHS = Self> {
  fn is_disjoint(&self, rhs: &RHS) -> bool;
}

pub trait Subset<RHS = Self> {
  fn is_subset(&self, rhs: &RHS) -> bool;
}

pub trait ProperSubset<RHS = Self> {
  fn is_proper_subset(&self, rhs: &RHS) -> bool;
}

impl<T, S> Disjoint for HashSet<T, S>
where T: Eq + Hash,
      S: BuildHasher
{
  fn is_disjoint(&self, rhs: &HashSet<T, S>) -> bool {
    self.as_std().is_disjoint(rhs.as_std())
  }
}

impl<T, S> Subset for HashSet<T, S>
where T: Eq + Hash,
      S: BuildHasher
{
  fn is_subset(&self, rhs: &HashSet<T, S>) -> bool {
    self.as_std().is_subset(rhs.as_std())
  }
}

impl<T, S> ProperSubset for HashSet<T, S>
where T: Eq + Hash,
      S: BuildHasher
{
  fn is_proper_subset(&self, rhs: &HashSet<T, S>) -> bool {
    self.len() < rhs.len() && self.as_std().is_subset(rhs.as_std())
  }
}

// Cardinality

pub trait Cardinality {
  type Size : Unsigned;
  fn size(&self) -> Self::Size;

  fn is_singleton(&self) -> bool {
    self.size() == <Self::Size as One>::one()
  }

  fn is_empty(&self) -> bool {
    self.size().is_zero()
  }
}

impl<T, S> Cardinality for HashSet<T, S>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.as_std().len()
  }
}

/// The size of a multiset counts every occurrence.
impl<T, S> Cardinality for HashMultiset<T, S>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.len()
  }
}

// Construction

pub trait Empty {
  fn empty() -> Self;
}

pub trait Singleton<Item> {
  fn singleton(value: Item) -> Self;
}

impl<T, S> Empty for HashSet<T, S>
where S: Default
{
  fn empty() -> HashSet<T, S> {
    HashSet::wrap(Default::default())
  }
}

impl<T, S> Singleton<T> for HashSet<T, S>
where T: Eq + Hash,
      S: BuildHasher + Default
{
  fn singleton(value: T) -> HashSet<T, S> {
    let mut set = HashSet::empty();
    set.insert(value);
    set
  }
}

impl<T, S> Empty for HashMultiset<T, S>
where S: Default
{
  fn empty() -> HashMultiset<T, S> {
    HashMultiset::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn symmetric_difference<A>(a: &A, b: &A) -> A where
   A: Intersection<Output=A> + Union<Output=A> + Difference<Output=A>
  {
    let union = a.union(b);
    let intersect = a.intersection(b);
    union.difference(&intersect)
  }

  fn make(values: &[i32]) -> HashSet<i32> {
    HashSet::from_values(values.iter().cloned())
  }

  #[test]
  fn test_generic_symmetric_difference() {
    let a = make(&[1, 2, 3, 4]);
    let b = make(&[3, 4, 5, 6]);
    let expected = make(&[1, 2, 5, 6]);
    assert_eq!(symmetric_difference(&a, &b), expected);
    assert_eq!(a.symmetric_difference(&b), expected);
  }

  #[test]
  fn test_hash_set_ops() {
    let cases = vec![
      (1, vec![], vec![], vec![], vec![], vec![]),
      (2, vec![1, 2], vec![], vec![], vec![1, 2], vec![1, 2]),
      (3, vec![1, 2, 3], vec![2, 3, 4], vec![2, 3], vec![1, 2, 3, 4], vec![1]),
      (4, vec![1], vec![2], vec![], vec![1, 2], vec![1])
    ];
    for (id, a, b, inter, union, diff) in cases {
      let (a, b) = (make(&a), make(&b));
      assert_eq!(a.intersection(&b), make(&inter), "test #{} of intersection", id);
      assert_eq!(&a & &b, make(&inter), "test #{} of &", id);
      assert_eq!(a.union(&b), make(&union), "test #{} of union", id);
      assert_eq!(&a | &b, make(&union), "test #{} of |", id);
      assert_eq!(a.difference(&b), make(&diff), "test #{} of difference", id);
      assert_eq!(a.clone() - b.clone(), make(&diff), "test #{} of -", id);
    }
  }

  #[test]
  fn test_hash_set_predicates() {
    let a = make(&[1, 2]);
    let b = make(&[1, 2, 3]);
    let c = make(&[7]);
    assert!(a.is_subset(&b));
    assert!(a.is_proper_subset(&b));
    assert!(b.is_subset(&b));
    assert!(!b.is_proper_subset(&b));
    assert!(a.is_disjoint(&c));
    assert!(!a.is_disjoint(&b));
    assert!(Contains::contains(&c, &7));
  }

  #[test]
  fn test_cardinality() {
    let empty: HashSet<i32> = Empty::empty();
    assert_eq!(empty.size(), 0);
    assert!(Cardinality::is_empty(&empty));
    let single: HashSet<i32> = Singleton::singleton(4);
    assert!(single.is_singleton());
    assert!(!Cardinality::is_empty(&single));
    assert_eq!(make(&[1, 2, 3]).size(), 3);
  }
}
