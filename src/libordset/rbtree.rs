// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Red-black tree map ordered by a [comparator](../comparator/index.html).
//!
//! Nodes are stored in an arena owned by the tree and linked by slot indices, parent links included. A removed node leaves no hole: the node in the last slot is moved into it and its neighbours are relinked, so the arena always holds exactly `len()` nodes.
//!
//! Every mutation keeps the red-black properties: the root is black, a red node has no red child and every path from a node down to a leaf crosses the same number of black nodes. Together with the ordering of keys under the comparator, this bounds the height by `2 log(n+1)` and all operations are `O(log n)`. [`check_invariants`](struct.RbTree.html#method.check_invariants) verifies these properties.
//!
//! # Examples
//!
//! ```rust
//! use ordset::RbTree;
//!
//! let mut tree = RbTree::new();
//! for (i, word) in ["five", "three", "eight"].iter().enumerate() {
//!   tree.put(*word, i);
//! }
//! assert_eq!(tree.put("three", 10), Some(1));
//! assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), vec!["eight", "five", "three"]);
//! assert_eq!(tree.remove(&"five"), Some(0));
//! assert_eq!(tree.get(&"five"), None);
//! assert!(tree.check_invariants().is_ok());
//! ```

use crate::comparator::Comparator;
use crate::cursor::TreeCursor;
use crate::error::{InvariantError, InvariantResult};
use log::trace;
use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
  Red,
  Black
}

#[derive(Clone)]
struct Node<K, V>
{
  key: K,
  value: V,
  color: Color,
  parent: Option<usize>,
  left: Option<usize>,
  right: Option<usize>
}

#[derive(Clone)]
pub struct RbTree<K, V>
{
  nodes: Vec<Node<K, V>>,
  root: Option<usize>,
  comparator: Comparator<K>
}

impl<K: Ord, V> RbTree<K, V>
{
  pub fn new() -> RbTree<K, V> {
    RbTree::with_comparator(Comparator::natural())
  }

  pub fn with_capacity(capacity: usize) -> RbTree<K, V> {
    RbTree::with_capacity_and_comparator(capacity, Comparator::natural())
  }
}

impl<K: Ord, V> Default for RbTree<K, V>
{
  fn default() -> RbTree<K, V> {
    RbTree::new()
  }
}

impl<K, V> RbTree<K, V>
{
  pub fn with_comparator(comparator: Comparator<K>) -> RbTree<K, V> {
    RbTree::with_capacity_and_comparator(0, comparator)
  }

  pub fn with_capacity_and_comparator(capacity: usize, comparator: Comparator<K>) -> RbTree<K, V> {
    RbTree {
      nodes: Vec::with_capacity(capacity),
      root: None,
      comparator: comparator
    }
  }

  pub fn comparator(&self) -> &Comparator<K> {
    &self.comparator
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn clear(&mut self) {
    trace!("clearing red-black tree of {} nodes", self.nodes.len());
    self.nodes.clear();
    self.root = None;
  }

  /// Inserts `key` with `value`. If an equal key is already present, both the stored key and its value are replaced and the old value is returned.
  pub fn put(&mut self, key: K, value: V) -> Option<V> {
    match self.locate(&key) {
      Ok(slot) => {
        let node = &mut self.nodes[slot];
        node.key = key;
        Some(mem::replace(&mut node.value, value))
      }
      Err((parent, on_left)) => {
        self.attach(key, value, parent, on_left);
        None
      }
    }
  }

  /// Inserts `key` only if no equal key is present. Returns `true` if the tree changed.
  pub fn put_if_absent(&mut self, key: K, value: V) -> bool {
    match self.locate(&key) {
      Ok(_) => false,
      Err((parent, on_left)) => {
        self.attach(key, value, parent, on_left);
        true
      }
    }
  }

  pub fn get(&self, key: &K) -> Option<&V> {
    self.lookup(key).map(|slot| &self.nodes[slot].value)
  }

  pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    match self.lookup(key) {
      Some(slot) => Some(&mut self.nodes[slot].value),
      None => None
    }
  }

  pub fn contains_key(&self, key: &K) -> bool {
    self.lookup(key).is_some()
  }

  pub fn remove(&mut self, key: &K) -> Option<V> {
    self.remove_entry(key).map(|(_, value)| value)
  }

  /// Removes the entry of `key` and returns the stored key and value, or `None` if the key is absent.
  pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
    let mut node = self.lookup(key)?;
    if let (Some(_), Some(right)) = (self.nodes[node].left, self.nodes[node].right) {
      let successor = self.leftmost(right);
      self.swap_entries(node, successor);
      node = successor;
    }
    // `node` has at most one child now.
    let child = self.nodes[node].left.or(self.nodes[node].right);
    if self.nodes[node].color == Color::Black {
      if self.color(child) == Color::Red {
        self.paint(child, Color::Black);
      }
      else {
        self.remove_fixup(node);
      }
    }
    self.replace_node(node, child);
    let entry = self.release(node);
    if let Some(root) = self.root {
      self.nodes[root].color = Color::Black;
    }
    Some(entry)
  }

  pub fn min(&self) -> Option<(&K, &V)> {
    self.first_slot().map(|slot| self.entry_at(slot))
  }

  pub fn max(&self) -> Option<(&K, &V)> {
    self.last_slot().map(|slot| self.entry_at(slot))
  }

  /// The entry with the greatest key less than or equal to `key`.
  pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
    let mut found = None;
    let mut current = self.root;
    while let Some(slot) = current {
      match self.comparator.compare(key, &self.nodes[slot].key) {
        Ordering::Equal => return Some(self.entry_at(slot)),
        Ordering::Less => current = self.nodes[slot].left,
        Ordering::Greater => {
          found = Some(slot);
          current = self.nodes[slot].right;
        }
      }
    }
    found.map(|slot| self.entry_at(slot))
  }

  /// The entry with the least key greater than or equal to `key`.
  pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
    let mut found = None;
    let mut current = self.root;
    while let Some(slot) = current {
      match self.comparator.compare(key, &self.nodes[slot].key) {
        Ordering::Equal => return Some(self.entry_at(slot)),
        Ordering::Greater => current = self.nodes[slot].right,
        Ordering::Less => {
          found = Some(slot);
          current = self.nodes[slot].left;
        }
      }
    }
    found.map(|slot| self.entry_at(slot))
  }

  pub fn iter(&self) -> Iter<K, V> {
    Iter {
      tree: self,
      front: self.first_slot(),
      back: self.last_slot(),
      remaining: self.len()
    }
  }

  /// Keys in ascending order.
  pub fn keys(&self) -> Keys<K, V> {
    Keys { inner: self.iter() }
  }

  /// Values in the ascending order of their keys.
  pub fn values(&self) -> Values<K, V> {
    Values { inner: self.iter() }
  }

  /// A cursor positioned before the first entry.
  pub fn cursor(&self) -> TreeCursor<K, V> {
    TreeCursor::new(self)
  }

  /// Verifies the red-black properties, the parent links, the node count and the ordering of the keys.
  pub fn check_invariants(&self) -> InvariantResult {
    let root = match self.root {
      None if self.nodes.is_empty() => return Ok(()),
      None => return Err(InvariantError::SizeMismatch { stored: self.nodes.len(), reachable: 0 }),
      Some(root) => root
    };
    if self.nodes[root].parent.is_some() {
      return Err(InvariantError::BrokenParentLink(root));
    }
    if self.nodes[root].color == Color::Red {
      return Err(InvariantError::RedRoot);
    }
    let (_, reachable) = self.check_subtree(Some(root))?;
    if reachable != self.nodes.len() {
      return Err(InvariantError::SizeMismatch { stored: self.nodes.len(), reachable: reachable });
    }
    let mut previous: Option<usize> = None;
    let mut current = self.first_slot();
    let mut position = 0;
    while let Some(slot) = current {
      if let Some(prev) = previous {
        if self.comparator.compare(&self.nodes[prev].key, &self.nodes[slot].key) != Ordering::Less {
          return Err(InvariantError::OutOfOrder(position));
        }
      }
      previous = Some(slot);
      position += 1;
      current = self.successor(slot);
    }
    Ok(())
  }

  // Returns the black height and the number of nodes of the subtree.
  fn check_subtree(&self, subtree: Option<usize>) -> Result<(usize, usize), InvariantError> {
    let slot = match subtree {
      None => return Ok((1, 0)),
      Some(slot) => slot
    };
    let node = &self.nodes[slot];
    for &child in [node.left, node.right].iter().flatten() {
      if self.nodes[child].parent != Some(slot) {
        return Err(InvariantError::BrokenParentLink(child));
      }
      if node.color == Color::Red && self.nodes[child].color == Color::Red {
        return Err(InvariantError::RedRedViolation(slot));
      }
    }
    let (left, left_count) = self.check_subtree(node.left)?;
    let (right, right_count) = self.check_subtree(node.right)?;
    if left != right {
      return Err(InvariantError::BlackHeightMismatch { node: slot, left: left, right: right });
    }
    let own = if node.color == Color::Black { 1 } else { 0 };
    Ok((left + own, left_count + right_count + 1))
  }

  pub(crate) fn entry_at(&self, slot: usize) -> (&K, &V) {
    let node = &self.nodes[slot];
    (&node.key, &node.value)
  }

  pub(crate) fn first_slot(&self) -> Option<usize> {
    self.root.map(|root| self.leftmost(root))
  }

  pub(crate) fn last_slot(&self) -> Option<usize> {
    self.root.map(|root| self.rightmost(root))
  }

  pub(crate) fn successor(&self, slot: usize) -> Option<usize> {
    if let Some(right) = self.nodes[slot].right {
      return Some(self.leftmost(right));
    }
    let mut child = slot;
    let mut parent = self.nodes[slot].parent;
    while let Some(p) = parent {
      if self.nodes[p].left == Some(child) {
        return Some(p);
      }
      child = p;
      parent = self.nodes[p].parent;
    }
    None
  }

  pub(crate) fn predecessor(&self, slot: usize) -> Option<usize> {
    if let Some(left) = self.nodes[slot].left {
      return Some(self.rightmost(left));
    }
    let mut child = slot;
    let mut parent = self.nodes[slot].parent;
    while let Some(p) = parent {
      if self.nodes[p].right == Some(child) {
        return Some(p);
      }
      child = p;
      parent = self.nodes[p].parent;
    }
    None
  }

  fn leftmost(&self, mut slot: usize) -> usize {
    while let Some(left) = self.nodes[slot].left {
      slot = left;
    }
    slot
  }

  fn rightmost(&self, mut slot: usize) -> usize {
    while let Some(right) = self.nodes[slot].right {
      slot = right;
    }
    slot
  }

  fn lookup(&self, key: &K) -> Option<usize> {
    self.locate(key).ok()
  }

  // `Ok` with the slot holding `key`, or `Err` with the parent under which `key` must be attached and whether it goes to its left.
  fn locate(&self, key: &K) -> Result<usize, (Option<usize>, bool)> {
    let mut parent = None;
    let mut on_left = false;
    let mut current = self.root;
    while let Some(slot) = current {
      parent = current;
      match self.comparator.compare(key, &self.nodes[slot].key) {
        Ordering::Equal => return Ok(slot),
        Ordering::Less => {
          on_left = true;
          current = self.nodes[slot].left;
        }
        Ordering::Greater => {
          on_left = false;
          current = self.nodes[slot].right;
        }
      }
    }
    Err((parent, on_left))
  }

  fn attach(&mut self, key: K, value: V, parent: Option<usize>, on_left: bool) {
    let slot = self.nodes.len();
    self.nodes.push(Node {
      key: key,
      value: value,
      color: Color::Red,
      parent: parent,
      left: None,
      right: None
    });
    match parent {
      None => self.root = Some(slot),
      Some(p) if on_left => self.nodes[p].left = Some(slot),
      Some(p) => self.nodes[p].right = Some(slot)
    }
    self.insert_fixup(slot);
  }

  fn insert_fixup(&mut self, mut node: usize) {
    while let Some(parent) = self.nodes[node].parent {
      if self.nodes[parent].color == Color::Black {
        break;
      }
      let grandparent = match self.nodes[parent].parent {
        Some(grandparent) => grandparent,
        None => break
      };
      let uncle = self.sibling(parent);
      if self.color(uncle) == Color::Red {
        self.nodes[parent].color = Color::Black;
        self.paint(uncle, Color::Black);
        self.nodes[grandparent].color = Color::Red;
        node = grandparent;
        continue;
      }
      let parent_on_left = self.nodes[grandparent].left == Some(parent);
      // Inner grandchild: rotate it above its parent, which becomes the outer grandchild.
      if parent_on_left && self.nodes[parent].right == Some(node) {
        self.rotate_left(parent);
        node = parent;
      }
      else if !parent_on_left && self.nodes[parent].left == Some(node) {
        self.rotate_right(parent);
        node = parent;
      }
      if let Some(parent) = self.nodes[node].parent {
        self.nodes[parent].color = Color::Black;
      }
      self.nodes[grandparent].color = Color::Red;
      if parent_on_left {
        self.rotate_right(grandparent);
      }
      else {
        self.rotate_left(grandparent);
      }
      break;
    }
    if let Some(root) = self.root {
      self.nodes[root].color = Color::Black;
    }
  }

  // `node` is a black node with no child, still linked to the tree, about to be removed: its parent side is one black node short.
  fn remove_fixup(&mut self, mut node: usize) {
    while let Some(parent) = self.nodes[node].parent {
      let node_on_left = self.nodes[parent].left == Some(node);
      let mut sibling = self.sibling(node);
      if self.color(sibling) == Color::Red {
        self.nodes[parent].color = Color::Red;
        self.paint(sibling, Color::Black);
        self.rotate_toward(parent, node_on_left);
        sibling = self.sibling(node);
      }
      let (near, far) = self.nephews(sibling, node_on_left);
      if self.color(near) == Color::Black && self.color(far) == Color::Black {
        self.paint(sibling, Color::Red);
        if self.nodes[parent].color == Color::Black {
          node = parent;
          continue;
        }
        self.nodes[parent].color = Color::Black;
        return;
      }
      if self.color(far) == Color::Black {
        self.paint(near, Color::Black);
        self.paint(sibling, Color::Red);
        if let Some(s) = sibling {
          self.rotate_toward(s, !node_on_left);
        }
        sibling = self.sibling(node);
      }
      let (_, far) = self.nephews(sibling, node_on_left);
      let parent_color = self.nodes[parent].color;
      self.paint(sibling, parent_color);
      self.nodes[parent].color = Color::Black;
      self.paint(far, Color::Black);
      self.rotate_toward(parent, node_on_left);
      return;
    }
  }

  // Children of `sibling`, the one closest to the removed node first.
  fn nephews(&self, sibling: Option<usize>, node_on_left: bool) -> (Option<usize>, Option<usize>) {
    match sibling {
      None => (None, None),
      Some(s) if node_on_left => (self.nodes[s].left, self.nodes[s].right),
      Some(s) => (self.nodes[s].right, self.nodes[s].left)
    }
  }

  fn color(&self, slot: Option<usize>) -> Color {
    slot.map_or(Color::Black, |slot| self.nodes[slot].color)
  }

  fn paint(&mut self, slot: Option<usize>, color: Color) {
    if let Some(slot) = slot {
      self.nodes[slot].color = color;
    }
  }

  fn sibling(&self, slot: usize) -> Option<usize> {
    let parent = self.nodes[slot].parent?;
    if self.nodes[parent].left == Some(slot) {
      self.nodes[parent].right
    }
    else {
      self.nodes[parent].left
    }
  }

  // Rotates `slot` down on the given side.
  fn rotate_toward(&mut self, slot: usize, left: bool) {
    if left {
      self.rotate_left(slot);
    }
    else {
      self.rotate_right(slot);
    }
  }

  fn rotate_left(&mut self, slot: usize) {
    let pivot = match self.nodes[slot].right {
      Some(pivot) => pivot,
      None => return
    };
    let inner = self.nodes[pivot].left;
    self.nodes[slot].right = inner;
    if let Some(inner) = inner {
      self.nodes[inner].parent = Some(slot);
    }
    self.replace_node(slot, Some(pivot));
    self.nodes[pivot].left = Some(slot);
    self.nodes[slot].parent = Some(pivot);
  }

  fn rotate_right(&mut self, slot: usize) {
    let pivot = match self.nodes[slot].left {
      Some(pivot) => pivot,
      None => return
    };
    let inner = self.nodes[pivot].right;
    self.nodes[slot].left = inner;
    if let Some(inner) = inner {
      self.nodes[inner].parent = Some(slot);
    }
    self.replace_node(slot, Some(pivot));
    self.nodes[pivot].right = Some(slot);
    self.nodes[slot].parent = Some(pivot);
  }

  // Puts `new` where `old` hangs from its parent. The links of `old` itself are left untouched.
  fn replace_node(&mut self, old: usize, new: Option<usize>) {
    let parent = self.nodes[old].parent;
    match parent {
      None => self.root = new,
      Some(p) => {
        if self.nodes[p].left == Some(old) {
          self.nodes[p].left = new;
        }
        else {
          self.nodes[p].right = new;
        }
      }
    }
    if let Some(new) = new {
      self.nodes[new].parent = parent;
    }
  }

  fn swap_entries(&mut self, a: usize, b: usize) {
    if a == b {
      return;
    }
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = self.nodes.split_at_mut(high);
    let (first, second) = (&mut head[low], &mut tail[0]);
    mem::swap(&mut first.key, &mut second.key);
    mem::swap(&mut first.value, &mut second.value);
  }

  // Frees the slot of an unlinked node by moving the last node of the arena into it.
  fn release(&mut self, slot: usize) -> (K, V) {
    let last = self.nodes.len() - 1;
    let removed = self.nodes.swap_remove(slot);
    if slot != last {
      trace!("moving red-black node from slot {} to slot {}", last, slot);
      let (parent, left, right) = {
        let moved = &self.nodes[slot];
        (moved.parent, moved.left, moved.right)
      };
      match parent {
        None => self.root = Some(slot),
        Some(p) => {
          if self.nodes[p].left == Some(last) {
            self.nodes[p].left = Some(slot);
          }
          else {
            self.nodes[p].right = Some(slot);
          }
        }
      }
      for &child in [left, right].iter().flatten() {
        self.nodes[child].parent = Some(slot);
      }
    }
    (removed.key, removed.value)
  }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RbTree<K, V>
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<K, V> Extend<(K, V)> for RbTree<K, V>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=(K, V)>
  {
    for (key, value) in iterable {
      self.put(key, value);
    }
  }
}

impl<K: Ord, V> FromIterator<(K, V)> for RbTree<K, V>
{
  fn from_iter<I>(iterable: I) -> RbTree<K, V> where
   I: IntoIterator<Item=(K, V)>
  {
    let mut tree = RbTree::new();
    tree.extend(iterable);
    tree
  }
}

impl<'a, K, V> IntoIterator for &'a RbTree<K, V>
{
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  fn into_iter(self) -> Iter<'a, K, V> {
    self.iter()
  }
}

/// In-order iterator over the entries of a tree, from both ends.
pub struct Iter<'a, K, V>
{
  tree: &'a RbTree<K, V>,
  front: Option<usize>,
  back: Option<usize>,
  remaining: usize
}

impl<'a, K, V> Clone for Iter<'a, K, V>
{
  fn clone(&self) -> Iter<'a, K, V> {
    Iter {
      tree: self.tree,
      front: self.front,
      back: self.back,
      remaining: self.remaining
    }
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
{
  type Item = (&'a K, &'a V);

  fn next(&mut self) -> Option<(&'a K, &'a V)> {
    if self.remaining == 0 {
      return None;
    }
    let slot = self.front?;
    self.remaining -= 1;
    self.front = self.tree.successor(slot);
    Some(self.tree.entry_at(slot))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V>
{
  fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
    if self.remaining == 0 {
      return None;
    }
    let slot = self.back?;
    self.remaining -= 1;
    self.back = self.tree.predecessor(slot);
    Some(self.tree.entry_at(slot))
  }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

pub struct Keys<'a, K, V>
{
  inner: Iter<'a, K, V>
}

impl<'a, K, V> Clone for Keys<'a, K, V>
{
  fn clone(&self) -> Keys<'a, K, V> {
    Keys { inner: self.inner.clone() }
  }
}

impl<'a, K, V> Iterator for Keys<'a, K, V>
{
  type Item = &'a K;

  fn next(&mut self) -> Option<&'a K> {
    self.inner.next().map(|(key, _)| key)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V>
{
  fn next_back(&mut self) -> Option<&'a K> {
    self.inner.next_back().map(|(key, _)| key)
  }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

pub struct Values<'a, K, V>
{
  inner: Iter<'a, K, V>
}

impl<'a, K, V> Iterator for Values<'a, K, V>
{
  type Item = &'a V;

  fn next(&mut self) -> Option<&'a V> {
    self.inner.next().map(|(_, value)| value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V>
{
  fn next_back(&mut self) -> Option<&'a V> {
    self.inner.next_back().map(|(_, value)| value)
  }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{Rng, SeedableRng};
  use rand_xorshift::XorShiftRng;
  use std::collections::BTreeMap;

  fn make_tree(keys: &[i32]) -> RbTree<i32, i32> {
    let mut tree = RbTree::new();
    for &k in keys {
      tree.put(k, k * 10);
    }
    tree
  }

  fn keys_of(tree: &RbTree<i32, i32>) -> Vec<i32> {
    tree.keys().cloned().collect()
  }

  #[test]
  fn test_put_get() {
    let mut tree = make_tree(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.get(&4), Some(&40));
    assert_eq!(tree.get(&6), None);
    assert_eq!(tree.put(4, 41), Some(40));
    assert_eq!(tree.get(&4), Some(&41));
    assert_eq!(tree.len(), 7);
    assert!(!tree.put_if_absent(4, 0));
    assert_eq!(tree.get(&4), Some(&41));
    assert!(tree.put_if_absent(6, 60));
    assert_eq!(tree.len(), 8);
    if let Some(v) = tree.get_mut(&6) {
      *v += 1;
    }
    assert_eq!(tree.get(&6), Some(&61));
    assert!(tree.check_invariants().is_ok());
  }

  #[test]
  fn test_keys_in_order() {
    let tree = make_tree(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(keys_of(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.values().cloned().collect::<Vec<_>>(), vec![10, 30, 40, 50, 70, 80, 90]);
    assert_eq!(tree.keys().rev().cloned().collect::<Vec<_>>(), vec![9, 8, 7, 5, 4, 3, 1]);
  }

  #[test]
  fn test_remove() {
    let mut tree = make_tree(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.remove(&5), Some(50));
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.get(&5), None);
    assert_eq!(tree.remove(&5), None);
    assert_eq!(tree.remove(&42), None);
    assert_eq!(tree.len(), 6);
    assert_eq!(keys_of(&tree), vec![1, 3, 4, 7, 8, 9]);
    assert!(tree.check_invariants().is_ok());
    for k in &[1, 3, 4, 7, 8, 9] {
      assert_eq!(tree.remove_entry(k), Some((*k, *k * 10)));
      assert!(tree.check_invariants().is_ok());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
  }

  #[test]
  fn test_extremes() {
    let empty: RbTree<i32, i32> = RbTree::new();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);
    assert_eq!(empty.floor(&3), None);

    let tree = make_tree(&[10, 20, 30, 40]);
    assert_eq!(tree.min(), Some((&10, &100)));
    assert_eq!(tree.max(), Some((&40, &400)));

    let cases = vec![
      (1, 5, None, Some(10)),
      (2, 10, Some(10), Some(10)),
      (3, 25, Some(20), Some(30)),
      (4, 40, Some(40), Some(40)),
      (5, 45, Some(40), None)
    ];
    for (id, key, floor, ceiling) in cases {
      assert_eq!(tree.floor(&key).map(|(k, _)| *k), floor, "test #{} of floor", id);
      assert_eq!(tree.ceiling(&key).map(|(k, _)| *k), ceiling, "test #{} of ceiling", id);
    }
  }

  #[test]
  fn test_custom_comparator() {
    let mut tree = RbTree::with_comparator(Comparator::new(|a: &i32, b: &i32| b.cmp(a)));
    tree.extend(vec![(1, ()), (5, ()), (3, ())]);
    assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), vec![5, 3, 1]);
    assert_eq!(tree.min().map(|(k, _)| *k), Some(5));
    assert_eq!(tree.floor(&4).map(|(k, _)| *k), Some(5));
    assert_eq!(tree.ceiling(&4).map(|(k, _)| *k), Some(3));
    assert!(tree.check_invariants().is_ok());
  }

  #[test]
  fn test_overwrite_replaces_key() {
    let by_len = Comparator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    let mut tree = RbTree::with_comparator(by_len);
    tree.put("ab", 1);
    assert_eq!(tree.put("cd", 2), Some(1));
    assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), vec!["cd"]);
  }

  #[test]
  fn test_sequential_insertions_stay_balanced() {
    let mut tree = RbTree::with_capacity(1024);
    for i in 0..1024 {
      tree.put(i, ());
    }
    assert!(tree.check_invariants().is_ok());
    // Height of a red-black tree is at most 2 log2(n+1).
    let mut depth = 0;
    let mut current = tree.root;
    while let Some(slot) = current {
      depth += 1;
      current = tree.nodes[slot].left;
    }
    assert!(depth <= 20);
    for i in (0..1024).step_by(2) {
      tree.remove(&i);
    }
    assert!(tree.check_invariants().is_ok());
    assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), (0..1024).filter(|i| i % 2 == 1).collect::<Vec<_>>());
  }

  #[test]
  fn test_random_operations() {
    let mut rng = XorShiftRng::seed_from_u64(0x5eed);
    let mut tree = RbTree::new();
    let mut model = BTreeMap::new();
    for step in 0..4000 {
      let key: u16 = rng.gen_range(0..300);
      if rng.gen_bool(0.6) {
        assert_eq!(tree.put(key, step), model.insert(key, step));
      }
      else {
        assert_eq!(tree.remove(&key), model.remove(&key));
      }
      assert_eq!(tree.len(), model.len());
      if step % 97 == 0 {
        assert_eq!(tree.check_invariants(), Ok(()));
      }
    }
    assert_eq!(tree.check_invariants(), Ok(()));
    assert!(tree.iter().map(|(k, v)| (*k, *v)).eq(model.iter().map(|(k, v)| (*k, *v))));
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.check_invariants(), Ok(()));
  }

  #[test]
  fn test_check_invariants_reports_violations() {
    let mut tree = make_tree(&[2, 1, 3]);
    let root = tree.root.unwrap();
    tree.nodes[root].color = Color::Red;
    assert_eq!(tree.check_invariants(), Err(InvariantError::RedRoot));
    tree.nodes[root].color = Color::Black;

    let left = tree.nodes[root].left.unwrap();
    tree.nodes[left].color = Color::Black;
    assert!(matches!(tree.check_invariants(), Err(InvariantError::BlackHeightMismatch { .. })));

    let mut tree = make_tree(&[2, 1, 3]);
    let root = tree.root.unwrap();
    let left = tree.nodes[root].left.unwrap();
    tree.nodes[left].key = 5;
    assert_eq!(tree.check_invariants(), Err(InvariantError::OutOfOrder(1)));

    let mut tree = make_tree(&[2, 1, 3]);
    let root = tree.root.unwrap();
    let right = tree.nodes[root].right.unwrap();
    tree.nodes[right].parent = None;
    assert_eq!(tree.check_invariants(), Err(InvariantError::BrokenParentLink(right)));

    let mut tree = make_tree(&[2, 1, 3, 4]);
    let four = tree.lookup(&4).unwrap();
    tree.nodes[four].color = Color::Red;
    let three = tree.lookup(&3).unwrap();
    tree.nodes[three].color = Color::Red;
    assert_eq!(tree.check_invariants(), Err(InvariantError::RedRedViolation(three)));
  }

  #[test]
  fn test_debug() {
    let tree = make_tree(&[2, 1]);
    assert_eq!(format!("{:?}", tree), "{1: 10, 2: 20}");
  }
}
