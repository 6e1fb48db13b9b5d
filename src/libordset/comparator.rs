// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Total orders over the elements of the tree based containers.
//!
//! A comparator is either the natural order of a type implementing `Ord` or a closure provided by the user. Besides ordering, a comparator has an *identity*: two ordered sets can only be combined (intersection, union, difference) if they were built with the same comparator. All natural orders of a type share the same identity, while a custom comparator is only identical to its clones.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use ordset::Comparator;
//!
//! let desc = Comparator::new(|a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(desc.compare(&1, &2), Ordering::Greater);
//! assert!(desc.same_as(&desc.clone()));
//!
//! let other_desc = Comparator::new(|a: &i32, b: &i32| b.cmp(a));
//! assert!(!desc.same_as(&other_desc));
//! assert!(Comparator::<i32>::natural().same_as(&Comparator::natural()));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

enum Kind<T>
{
  Natural(fn(&T, &T) -> Ordering),
  Custom(Arc<CompareFn<T>>)
}

pub struct Comparator<T>
{
  kind: Kind<T>
}

impl<T> Comparator<T>
{
  /// The order given by `Ord`.
  pub fn natural() -> Comparator<T> where
    T: Ord
  {
    Comparator {
      kind: Kind::Natural(<T as Ord>::cmp)
    }
  }

  /// Wraps `compare` into a comparator with a fresh identity.
  pub fn new<F>(compare: F) -> Comparator<T> where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static
  {
    Comparator {
      kind: Kind::Custom(Arc::new(compare))
    }
  }

  pub fn compare(&self, a: &T, b: &T) -> Ordering {
    match self.kind {
      Kind::Natural(cmp) => cmp(a, b),
      Kind::Custom(ref cmp) => cmp(a, b)
    }
  }

  pub fn is_natural(&self) -> bool {
    match self.kind {
      Kind::Natural(_) => true,
      Kind::Custom(_) => false
    }
  }

  /// Identity test, not a behavioral one: two different closures computing the same order are not the same comparator.
  pub fn same_as(&self, other: &Comparator<T>) -> bool {
    match (&self.kind, &other.kind) {
      (Kind::Natural(_), Kind::Natural(_)) => true,
      (Kind::Custom(a), Kind::Custom(b)) => Arc::ptr_eq(a, b),
      _ => false
    }
  }
}

impl<T> Clone for Comparator<T>
{
  fn clone(&self) -> Comparator<T> {
    let kind = match self.kind {
      Kind::Natural(cmp) => Kind::Natural(cmp),
      Kind::Custom(ref cmp) => Kind::Custom(Arc::clone(cmp))
    };
    Comparator { kind: kind }
  }
}

impl<T: Ord> Default for Comparator<T>
{
  fn default() -> Comparator<T> {
    Comparator::natural()
  }
}

impl<T> fmt::Debug for Comparator<T>
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.kind {
      Kind::Natural(_) => write!(f, "Natural"),
      Kind::Custom(ref cmp) => write!(f, "Custom({:p})", Arc::as_ptr(cmp) as *const ())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_natural_order() {
    let cmp = Comparator::<i32>::natural();
    assert!(cmp.is_natural());
    assert_eq!(cmp.compare(&1, &2), Ordering::Less);
    assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
    assert_eq!(cmp.compare(&3, &2), Ordering::Greater);
  }

  #[test]
  fn test_custom_order() {
    let cmp = Comparator::new(|a: &String, b: &String| a.len().cmp(&b.len()));
    assert!(!cmp.is_natural());
    assert_eq!(cmp.compare(&"zz".to_string(), &"aaa".to_string()), Ordering::Less);
    assert_eq!(cmp.compare(&"ab".to_string(), &"cd".to_string()), Ordering::Equal);
  }

  #[test]
  fn test_identity() {
    let natural = Comparator::<i32>::natural();
    let default: Comparator<i32> = Default::default();
    let asc = Comparator::new(|a: &i32, b: &i32| a.cmp(b));
    let asc_twin = Comparator::new(|a: &i32, b: &i32| a.cmp(b));

    assert!(natural.same_as(&default));
    assert!(asc.same_as(&asc));
    assert!(asc.same_as(&asc.clone()));
    assert!(!asc.same_as(&asc_twin));
    assert!(!asc.same_as(&natural));
    assert!(!natural.same_as(&asc));
  }

  #[test]
  fn test_debug() {
    assert_eq!(format!("{:?}", Comparator::<u8>::natural()), "Natural");
    let custom = Comparator::new(|a: &u8, b: &u8| a.cmp(b));
    assert!(format!("{:?}", custom).starts_with("Custom(0x"));
  }
}
