//! Depth-first walks over a tree.
//!
//! The three recursive walks hand every payload to a visitor together with
//! a caller-owned context. [`Iter`] is the lazy in-order counterpart.

use crate::arena::Arena;
use crate::node::{get_l, get_r};

/// Visit, left, right.
pub fn pre_order<T, X, F>(arena: &Arena<T>, root: Option<u32>, ctx: &mut X, mut visit: F)
where
    F: FnMut(&T, &mut X),
{
    fn walk<T, X, F: FnMut(&T, &mut X)>(
        arena: &Arena<T>,
        node: Option<u32>,
        ctx: &mut X,
        visit: &mut F,
    ) {
        if let Some(i) = node {
            visit(&arena[i].payload, ctx);
            walk(arena, get_l(arena, i), ctx, visit);
            walk(arena, get_r(arena, i), ctx, visit);
        }
    }
    walk(arena, root, ctx, &mut visit);
}

/// Left, visit, right. Payloads come out in ascending comparator order.
pub fn in_order<T, X, F>(arena: &Arena<T>, root: Option<u32>, ctx: &mut X, mut visit: F)
where
    F: FnMut(&T, &mut X),
{
    fn walk<T, X, F: FnMut(&T, &mut X)>(
        arena: &Arena<T>,
        node: Option<u32>,
        ctx: &mut X,
        visit: &mut F,
    ) {
        if let Some(i) = node {
            walk(arena, get_l(arena, i), ctx, visit);
            visit(&arena[i].payload, ctx);
            walk(arena, get_r(arena, i), ctx, visit);
        }
    }
    walk(arena, root, ctx, &mut visit);
}

/// Left, right, visit.
pub fn post_order<T, X, F>(arena: &Arena<T>, root: Option<u32>, ctx: &mut X, mut visit: F)
where
    F: FnMut(&T, &mut X),
{
    fn walk<T, X, F: FnMut(&T, &mut X)>(
        arena: &Arena<T>,
        node: Option<u32>,
        ctx: &mut X,
        visit: &mut F,
    ) {
        if let Some(i) = node {
            walk(arena, get_l(arena, i), ctx, visit);
            walk(arena, get_r(arena, i), ctx, visit);
            visit(&arena[i].payload, ctx);
        }
    }
    walk(arena, root, ctx, &mut visit);
}

/// In-order iterator yielding `(handle, payload)` pairs.
///
/// Keeps the path to the current node on an explicit stack, so memory use
/// is bounded by the tree height.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<u32>,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(arena: &'a Arena<T>, root: Option<u32>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = get_l(self.arena, i);
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        self.push_left(get_r(self.arena, i));
        Some((i, &self.arena[i].payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::insert_value;

    fn build(values: &[i32]) -> (Arena<i32>, Option<u32>) {
        let less = |a: &i32, b: &i32| a < b;
        let mut arena = Arena::new();
        let mut root = None;
        for &v in values {
            root = Some(insert_value(&mut arena, root, &less, v).unwrap());
        }
        (arena, root)
    }

    #[test]
    fn test_three_orders() {
        // 9 -> (4 -> (3, 5), 15)
        let (arena, root) = build(&[9, 5, 15, 4, 3]);
        let mut pre = Vec::new();
        pre_order(&arena, root, &mut pre, |v, out| out.push(*v));
        assert_eq!(pre, vec![9, 4, 3, 5, 15]);

        let mut ino = Vec::new();
        in_order(&arena, root, &mut ino, |v, out| out.push(*v));
        assert_eq!(ino, vec![3, 4, 5, 9, 15]);

        let mut post = Vec::new();
        post_order(&arena, root, &mut post, |v, out| out.push(*v));
        assert_eq!(post, vec![3, 5, 4, 15, 9]);
    }

    #[test]
    fn test_empty_tree_visits_nothing() {
        let arena = Arena::<i32>::new();
        let mut count = 0;
        in_order(&arena, None, &mut count, |_, c| *c += 1);
        pre_order(&arena, None, &mut count, |_, c| *c += 1);
        post_order(&arena, None, &mut count, |_, c| *c += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_iter_matches_in_order() {
        let (arena, root) = build(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
        let from_iter: Vec<i32> = Iter::new(&arena, root).map(|(_, v)| *v).collect();
        let mut walked = Vec::new();
        in_order(&arena, root, &mut walked, |v, out: &mut Vec<i32>| out.push(*v));
        assert_eq!(walked, from_iter);
        assert_eq!(from_iter, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
        assert_eq!(Iter::new(&arena, None).count(), 0);
    }
}
