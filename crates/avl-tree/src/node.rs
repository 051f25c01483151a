//! Node layout and the low-level node primitives.
//!
//! Links are `Option<u32>` handles into an [`Arena`]. None of the
//! functions here compare payloads or rebalance; they are the building
//! blocks the rotation and insert/delete code is written in terms of.

use crate::arena::Arena;

/// A single tree node.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    /// Height of the subtree rooted here. A leaf has height 1.
    pub height: usize,
    pub payload: T,
}

impl<T> AvlNode<T> {
    pub fn new(payload: T) -> Self {
        Self {
            l: None,
            r: None,
            height: 1,
            payload,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}

#[inline]
pub(crate) fn get_l<T>(arena: &Arena<T>, i: u32) -> Option<u32> {
    arena[i].l
}

#[inline]
pub(crate) fn get_r<T>(arena: &Arena<T>, i: u32) -> Option<u32> {
    arena[i].r
}

#[inline]
pub(crate) fn set_l<T>(arena: &mut Arena<T>, i: u32, v: Option<u32>) {
    arena[i].l = v;
}

#[inline]
pub(crate) fn set_r<T>(arena: &mut Arena<T>, i: u32, v: Option<u32>) {
    arena[i].r = v;
}

/// Stored height of `node`, `0` for an absent node.
#[inline]
pub fn height<T>(arena: &Arena<T>, node: Option<u32>) -> usize {
    node.map_or(0, |i| arena[i].height)
}

/// Overwrites the stored height. No recomputation takes place.
#[inline]
pub fn set_height<T>(arena: &mut Arena<T>, node: u32, height: usize) {
    arena[node].height = height;
}

/// Recomputes the stored height of `node` from its children.
#[inline]
pub(crate) fn update_height<T>(arena: &mut Arena<T>, node: u32) {
    let h = 1 + height(arena, get_l(arena, node)).max(height(arena, get_r(arena, node)));
    set_height(arena, node, h);
}

/// `height(left) - height(right)`.
#[inline]
pub(crate) fn balance<T>(arena: &Arena<T>, node: u32) -> isize {
    height(arena, get_l(arena, node)) as isize - height(arena, get_r(arena, node)) as isize
}

/// Leftmost node of the subtree.
pub fn min<T>(arena: &Arena<T>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node of the subtree.
pub fn max<T>(arena: &Arena<T>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// Height found by walking the subtree, ignoring stored heights.
pub fn subtree_height<T>(arena: &Arena<T>, root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => {
            1 + subtree_height(arena, get_l(arena, i)).max(subtree_height(arena, get_r(arena, i)))
        }
    }
}

/// Number of nodes under `root`.
pub fn size<T>(arena: &Arena<T>, root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        1 + size(arena, get_l(arena, i)) + size(arena, get_r(arena, i))
    })
}
