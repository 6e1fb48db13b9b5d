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

//! Hash-based collections and the generic set operations shared with the ordered set.
//!
//! The [operations](ops/index.html) categorize what a collection can do (intersection, union, membership, cardinality...) so generic algorithms can be written against trait bounds. `HashSet` wraps the standard hash set to expose these operations, since some of them share a name with existing methods. `HashMultiset` counts the occurrences of each value.
//!
//! Iteration can't be an operation inside a trait because we'd need higher kinded types (think about `type Output=Iterator<&'a Item>`, `'a` is not defined/accessible inside the trait).
//!
//! # Examples
//!
//! ```rust
//! use ordset::ncollections::ops::*;
//! use ordset::{HashSet, OrderedSet};
//!
//! fn symmetric_difference<A>(a: &A, b: &A) -> A where
//!  A: Intersection<Output=A> + Union<Output=A> + Difference<Output=A>
//! {
//!   let union = a.union(b);
//!   let intersect = a.intersection(b);
//!   union.difference(&intersect)
//! }
//!
//! let a = HashSet::from_values(vec![1, 2, 3, 4]);
//! let b = HashSet::from_values(vec![3, 4, 5, 6]);
//! assert_eq!(symmetric_difference(&a, &b), HashSet::from_values(vec![1, 2, 5, 6]));
//!
//! let a = OrderedSet::from_values(vec![1, 2, 3, 4]);
//! let b = OrderedSet::from_values(vec![3, 4, 5, 6]);
//! assert_eq!(symmetric_difference(&a, &b).values(), vec![1, 2, 5, 6]);
//! ```

mod macros;
pub mod ops;
pub mod hash_set;
pub mod multiset;

pub use crate::ncollections::hash_set::HashSet;
pub use crate::ncollections::multiset::HashMultiset;
