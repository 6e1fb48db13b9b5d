// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stateful cursor over a red-black tree.
//!
//! The cursor is either before the first entry, on an entry, or past the last entry. `next()` from before the first entry lands on the first one, `prev()` from past the last entry lands on the last one. Moving beyond an end parks the cursor on the matching sentinel and returns `false`.
//!
//! The cursor borrows the tree, so the tree cannot be modified while a cursor over it is alive.

use crate::rbtree::RbTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
  BeforeFirst,
  At(usize),
  PastLast
}

pub struct TreeCursor<'a, K, V>
{
  tree: &'a RbTree<K, V>,
  position: Position
}

impl<'a, K, V> Clone for TreeCursor<'a, K, V>
{
  fn clone(&self) -> TreeCursor<'a, K, V> {
    TreeCursor {
      tree: self.tree,
      position: self.position
    }
  }
}

impl<'a, K, V> TreeCursor<'a, K, V>
{
  pub(crate) fn new(tree: &'a RbTree<K, V>) -> TreeCursor<'a, K, V> {
    TreeCursor {
      tree: tree,
      position: Position::BeforeFirst
    }
  }

  /// Moves to the next entry. Returns `false` when the cursor moves past the last entry.
  pub fn next(&mut self) -> bool {
    let slot = match self.position {
      Position::BeforeFirst => self.tree.first_slot(),
      Position::At(slot) => self.tree.successor(slot),
      Position::PastLast => None
    };
    self.settle(slot, Position::PastLast)
  }

  /// Moves to the previous entry. Returns `false` when the cursor moves before the first entry.
  pub fn prev(&mut self) -> bool {
    let slot = match self.position {
      Position::PastLast => self.tree.last_slot(),
      Position::At(slot) => self.tree.predecessor(slot),
      Position::BeforeFirst => None
    };
    self.settle(slot, Position::BeforeFirst)
  }

  fn settle(&mut self, slot: Option<usize>, sentinel: Position) -> bool {
    match slot {
      Some(slot) => {
        self.position = Position::At(slot);
        true
      }
      None => {
        self.position = sentinel;
        false
      }
    }
  }

  /// The current entry, `None` on a sentinel.
  pub fn entry(&self) -> Option<(&'a K, &'a V)> {
    match self.position {
      Position::At(slot) => Some(self.tree.entry_at(slot)),
      _ => None
    }
  }

  pub fn key(&self) -> Option<&'a K> {
    self.entry().map(|(key, _)| key)
  }

  pub fn value(&self) -> Option<&'a V> {
    self.entry().map(|(_, value)| value)
  }

  /// Resets the cursor before the first entry.
  pub fn begin(&mut self) {
    self.position = Position::BeforeFirst;
  }

  /// Moves the cursor past the last entry.
  pub fn end(&mut self) {
    self.position = Position::PastLast;
  }

  pub fn is_before_first(&self) -> bool {
    self.position == Position::BeforeFirst
  }

  pub fn is_past_last(&self) -> bool {
    self.position == Position::PastLast
  }

  pub fn first(&mut self) -> bool {
    self.begin();
    self.next()
  }

  pub fn last(&mut self) -> bool {
    self.end();
    self.prev()
  }

  /// Advances until `predicate` holds on the current entry. Returns `false` if the cursor went past the last entry.
  pub fn next_to<P>(&mut self, mut predicate: P) -> bool where
    P: FnMut(&'a K, &'a V) -> bool
  {
    while self.next() {
      if let Some((key, value)) = self.entry() {
        if predicate(key, value) {
          return true;
        }
      }
    }
    false
  }

  /// Moves backward until `predicate` holds on the current entry. Returns `false` if the cursor went before the first entry.
  pub fn prev_to<P>(&mut self, mut predicate: P) -> bool where
    P: FnMut(&'a K, &'a V) -> bool
  {
    while self.prev() {
      if let Some((key, value)) = self.entry() {
        if predicate(key, value) {
          return true;
        }
      }
    }
    false
  }
}

#[cfg(test)]
mod tests {
  use crate::rbtree::RbTree;

  fn make_tree(keys: &[u32]) -> RbTree<u32, char> {
    let mut tree = RbTree::new();
    for &k in keys {
      tree.put(k, (b'a' + k as u8) as char);
    }
    tree
  }

  #[test]
  fn test_forward_then_back() {
    let tree = make_tree(&[3, 1, 2]);
    let mut cursor = tree.cursor();
    assert!(cursor.is_before_first());
    assert_eq!(cursor.key(), None);
    let mut seen = vec![];
    while cursor.next() {
      seen.push(*cursor.key().unwrap());
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert!(cursor.is_past_last());
    assert!(!cursor.next());
    assert!(cursor.prev());
    assert_eq!(cursor.entry(), Some((&3, &'d')));
  }

  #[test]
  fn test_backward() {
    let tree = make_tree(&[3, 1, 2]);
    let mut cursor = tree.cursor();
    cursor.end();
    let mut seen = vec![];
    while cursor.prev() {
      seen.push(*cursor.key().unwrap());
    }
    assert_eq!(seen, vec![3, 2, 1]);
    assert!(cursor.is_before_first());
    assert!(!cursor.prev());
    assert!(cursor.next());
    assert_eq!(cursor.key(), Some(&1));
  }

  #[test]
  fn test_first_last() {
    let empty: RbTree<u32, char> = RbTree::new();
    let mut cursor = empty.cursor();
    assert!(!cursor.first());
    assert!(!cursor.last());
    assert!(!cursor.next());

    let tree = make_tree(&[4, 0, 9]);
    let mut cursor = tree.cursor();
    assert!(cursor.last());
    assert_eq!(cursor.key(), Some(&9));
    assert!(cursor.first());
    assert_eq!(cursor.value(), Some(&'a'));
  }

  #[test]
  fn test_next_to_prev_to() {
    let tree = make_tree(&[1, 2, 3, 4, 5, 6]);
    let mut cursor = tree.cursor();
    assert!(cursor.next_to(|k, _| k % 2 == 0));
    assert_eq!(cursor.key(), Some(&2));
    assert!(cursor.next_to(|k, _| k % 2 == 0));
    assert_eq!(cursor.key(), Some(&4));
    assert!(cursor.prev_to(|_, v| *v == 'b'));
    assert_eq!(cursor.key(), Some(&1));
    assert!(!cursor.next_to(|k, _| *k > 10));
    assert!(cursor.is_past_last());
    assert!(!cursor.prev_to(|k, _| *k > 10));
    assert!(cursor.is_before_first());
  }
}
