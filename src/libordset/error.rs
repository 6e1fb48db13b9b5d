// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structural violations reported by [`RbTree::check_invariants`](../rbtree/struct.RbTree.html#method.check_invariants).
//!
//! None of the container operations fail: absent elements give `false` or `None`, and set operations between incompatible sets give an empty set. This error type only describes a tree that lost one of its red-black properties, which is a bug of this crate or of an inconsistent comparator.

use thiserror::Error;

pub type InvariantResult = Result<(), InvariantError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
  #[error("the root node is red")]
  RedRoot,

  #[error("red node at slot {0} has a red child")]
  RedRedViolation(usize),

  #[error("black height below slot {node} differs: {left} on the left, {right} on the right")]
  BlackHeightMismatch {
    node: usize,
    left: usize,
    right: usize
  },

  #[error("keys are not strictly increasing at in-order position {0}")]
  OutOfOrder(usize),

  #[error("the parent link of slot {0} does not point to its parent")]
  BrokenParentLink(usize),

  #[error("the tree holds {stored} nodes but {reachable} are reachable from the root")]
  SizeMismatch {
    stored: usize,
    reachable: usize
  }
}
