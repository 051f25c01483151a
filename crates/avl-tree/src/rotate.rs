//! Rotation primitives.
//!
//! The direction in a name is the side of the child being promoted:
//! [`rotate_left`] lifts the left child into the parent's place. Insert and
//! delete use this one convention.
//!
//! ```text
//!        t                 l
//!       / \               / \
//!      l   c    ==>      a   t
//!     / \                   / \
//!    a   b                 b   c
//! ```
//!
//! Each primitive returns the handle of the new subtree root; the caller
//! relinks it into the parent slot.

use tracing::trace;

use crate::arena::Arena;
use crate::node::{get_l, get_r, set_l, set_r, update_height};

/// Promotes the left child of `t`. Returns `t` unchanged if it has none.
pub fn rotate_left<T>(arena: &mut Arena<T>, t: u32) -> u32 {
    let Some(l) = get_l(arena, t) else {
        return t;
    };
    let lr = get_r(arena, l);
    set_l(arena, t, lr);
    set_r(arena, l, Some(t));
    update_height(arena, t);
    update_height(arena, l);
    trace!(demoted = t, promoted = l, "rotate left");
    l
}

/// Promotes the right child of `t`. Returns `t` unchanged if it has none.
pub fn rotate_right<T>(arena: &mut Arena<T>, t: u32) -> u32 {
    let Some(r) = get_r(arena, t) else {
        return t;
    };
    let rl = get_l(arena, r);
    set_r(arena, t, rl);
    set_l(arena, r, Some(t));
    update_height(arena, t);
    update_height(arena, r);
    trace!(demoted = t, promoted = r, "rotate right");
    r
}

/// Left-right case: lifts the right child of `t.l` to the top.
pub fn double_rotate_left<T>(arena: &mut Arena<T>, t: u32) -> u32 {
    if let Some(l) = get_l(arena, t) {
        let l = rotate_right(arena, l);
        set_l(arena, t, Some(l));
    }
    rotate_left(arena, t)
}

/// Right-left case: lifts the left child of `t.r` to the top.
pub fn double_rotate_right<T>(arena: &mut Arena<T>, t: u32) -> u32 {
    if let Some(r) = get_r(arena, t) {
        let r = rotate_left(arena, r);
        set_r(arena, t, Some(r));
    }
    rotate_right(arena, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{height, set_height};

    fn link(arena: &mut Arena<i32>, n: u32, l: Option<u32>, r: Option<u32>, h: usize) -> u32 {
        set_l(arena, n, l);
        set_r(arena, n, r);
        set_height(arena, n, h);
        n
    }

    fn key(arena: &Arena<i32>, n: Option<u32>) -> Option<i32> {
        n.map(|i| arena[i].payload)
    }

    #[test]
    fn test_rotate_left_promotes_left_child() {
        let mut arena = Arena::new();
        let a = arena.create(1);
        let b = arena.create(3);
        let c = arena.create(5);
        let l = arena.create(2);
        let t = arena.create(4);
        link(&mut arena, l, Some(a), Some(b), 2);
        link(&mut arena, t, Some(l), Some(c), 3);

        let root = rotate_left(&mut arena, t);
        assert_eq!(root, l);
        assert_eq!(key(&arena, get_l(&arena, root)), Some(1));
        assert_eq!(key(&arena, get_r(&arena, root)), Some(4));
        assert_eq!(key(&arena, get_l(&arena, t)), Some(3));
        assert_eq!(key(&arena, get_r(&arena, t)), Some(5));
        assert_eq!(height(&arena, Some(t)), 2);
        assert_eq!(height(&arena, Some(root)), 3);
    }

    #[test]
    fn test_rotate_right_single_chain() {
        let mut arena = Arena::new();
        let c = arena.create(15);
        let b = arena.create(10);
        let a = arena.create(5);
        link(&mut arena, b, None, Some(c), 2);
        link(&mut arena, a, None, Some(b), 3);

        let root = rotate_right(&mut arena, a);
        assert_eq!(root, b);
        assert_eq!(get_l(&arena, b), Some(a));
        assert_eq!(get_r(&arena, b), Some(c));
        assert_eq!(height(&arena, Some(a)), 1);
        assert_eq!(height(&arena, Some(b)), 2);
    }

    #[test]
    fn test_double_rotations() {
        let mut arena = Arena::new();
        let t = arena.create(30);
        let l = arena.create(10);
        let lr = arena.create(20);
        link(&mut arena, l, None, Some(lr), 2);
        link(&mut arena, t, Some(l), None, 3);
        let root = double_rotate_left(&mut arena, t);
        assert_eq!(key(&arena, Some(root)), Some(20));
        assert_eq!(get_l(&arena, root), Some(l));
        assert_eq!(get_r(&arena, root), Some(t));
        assert_eq!(height(&arena, Some(root)), 2);

        let mut arena = Arena::new();
        let t = arena.create(10);
        let r = arena.create(30);
        let rl = arena.create(20);
        link(&mut arena, r, Some(rl), None, 2);
        link(&mut arena, t, None, Some(r), 3);
        let root = double_rotate_right(&mut arena, t);
        assert_eq!(key(&arena, Some(root)), Some(20));
        assert_eq!(get_l(&arena, root), Some(t));
        assert_eq!(get_r(&arena, root), Some(r));
        assert_eq!(height(&arena, Some(t)), 1);
        assert_eq!(height(&arena, Some(r)), 1);
    }

    #[test]
    fn test_rotate_without_child_is_noop() {
        let mut arena = Arena::new();
        let t = arena.create(1);
        assert_eq!(rotate_left(&mut arena, t), t);
        assert_eq!(rotate_right(&mut arena, t), t);
        assert_eq!(height(&arena, Some(t)), 1);
    }
}
