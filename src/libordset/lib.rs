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

//! This library proposes an ordered set stored in a red-black tree, together with a hash set and a hash multiset. The ordering of a tree is given by a [comparator](comparator/index.html): the natural order of the values or a user closure. Binary operations between ordered sets are only defined when both sets share the same comparator, see the [ordered set module](ordered_set/index.html).
//!
//! A second part of this library defines a bunch of traits for programming generic operations on collections, see the [ncollections module](ncollections/index.html).
//!
//! # Examples
//!
//! ```rust
//! use ordset::{Comparator, OrderedSet};
//! use ordset::ncollections::ops::*;
//!
//! let mut set = OrderedSet::from_values(vec![5, 3, 8, 1, 4, 7, 9]);
//! set.remove(&4);
//! assert_eq!(set.values(), vec![1, 3, 5, 7, 8, 9]);
//!
//! let mut cursor = set.cursor();
//! assert!(cursor.next_to(|_, value| *value > 4));
//! assert_eq!((cursor.index(), cursor.value()), (2, Some(&5)));
//!
//! let by_length = Comparator::new(|a: &&'static str, b: &&'static str| a.len().cmp(&b.len()));
//! let short = OrderedSet::from_values_with(by_length.clone(), vec!["ab", "c"]);
//! let long = OrderedSet::from_values_with(by_length, vec!["abc", "de"]);
//! assert_eq!(short.union(&long).values(), vec!["c", "ab", "abc"]);
//!
//! let other = OrderedSet::from_values_with(Comparator::new(|a: &&'static str, b: &&'static str| a.cmp(b)), vec!["c"]);
//! assert!(short.intersection(&other).is_empty());
//! ```
//!
//! # References
//! * Cormen, Leiserson, Rivest and Stein, *Introduction to Algorithms*, chapter 13 (red-black trees).

pub mod comparator;
pub mod error;
#[macro_use]
pub mod ncollections;
pub mod rbtree;
pub mod cursor;
pub mod ordered_set;

pub use crate::comparator::Comparator;
pub use crate::cursor::TreeCursor;
pub use crate::error::InvariantError;
pub use crate::ncollections::{HashMultiset, HashSet};
pub use crate::ordered_set::OrderedSet;
pub use crate::rbtree::RbTree;
