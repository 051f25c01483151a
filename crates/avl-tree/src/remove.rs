//! Deletion and whole-tree teardown.

use std::cmp::Ordering;

use tracing::debug;

use crate::arena::Arena;
use crate::node::{get_l, get_r, set_height, set_l, set_r};
use crate::util::rebalance;

/// Unlinks the leftmost node of `t`'s subtree.
///
/// Returns the rebalanced remainder and the detached node.
fn detach_min<T>(arena: &mut Arena<T>, t: u32) -> (Option<u32>, u32) {
    let Some(l) = get_l(arena, t) else {
        let r = get_r(arena, t);
        set_r(arena, t, None);
        return (r, t);
    };
    let (l, min) = detach_min(arena, l);
    set_l(arena, t, l);
    (Some(rebalance(arena, t)), min)
}

/// Recursive delete. `probe(arena, node)` tells where the target lies
/// relative to `node`; `None` stops the search with no match.
///
/// Returns the new subtree root and the detached node, if one was found.
fn delete_at<T, P>(arena: &mut Arena<T>, tree: Option<u32>, probe: &P) -> (Option<u32>, Option<u32>)
where
    P: Fn(&Arena<T>, u32) -> Option<Ordering>,
{
    let Some(t) = tree else {
        return (None, None);
    };

    match probe(arena, t) {
        None => (Some(t), None),
        Some(Ordering::Less) => {
            let (l, removed) = delete_at(arena, get_l(arena, t), probe);
            if removed.is_none() {
                return (Some(t), None);
            }
            set_l(arena, t, l);
            (Some(rebalance(arena, t)), removed)
        }
        Some(Ordering::Greater) => {
            let (r, removed) = delete_at(arena, get_r(arena, t), probe);
            if removed.is_none() {
                return (Some(t), None);
            }
            set_r(arena, t, r);
            (Some(rebalance(arena, t)), removed)
        }
        Some(Ordering::Equal) => {
            let l = get_l(arena, t);
            let r = get_r(arena, t);
            set_l(arena, t, None);
            set_r(arena, t, None);
            set_height(arena, t, 1);
            match (l, r) {
                (Some(l), Some(r)) => {
                    // The in-order successor takes over t's position.
                    let (r, s) = detach_min(arena, r);
                    set_l(arena, s, Some(l));
                    set_r(arena, s, r);
                    (Some(rebalance(arena, s)), Some(t))
                }
                (child, None) | (None, child) => (child, Some(t)),
            }
        }
    }
}

fn key_probe<'a, T, C>(cmp: &'a C, key: &'a T) -> impl Fn(&Arena<T>, u32) -> Option<Ordering> + 'a
where
    C: Fn(&T, &T) -> bool,
{
    move |arena: &Arena<T>, i: u32| {
        let payload = &arena[i].payload;
        Some(if cmp(key, payload) {
            Ordering::Less
        } else if cmp(payload, key) {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

/// Removes the node equal to `key`.
///
/// Returns the new root and the removed payload. An absent key leaves the
/// tree untouched.
///
/// The released handle is always the matched node. When it has two
/// children its in-order successor is moved into its position, payloads are
/// never copied between nodes, so handles to every other node stay valid.
pub fn delete_by_value<T, C>(
    arena: &mut Arena<T>,
    root: Option<u32>,
    cmp: &C,
    key: &T,
) -> (Option<u32>, Option<T>)
where
    C: Fn(&T, &T) -> bool,
{
    let (root, removed) = delete_at(arena, root, &key_probe(cmp, key));
    (root, removed.map(|n| arena.release(n)))
}

/// Removes exactly node `n`, located through its own payload.
///
/// If the equal-keyed node reached by the search is not `n` (for instance
/// `n` belongs to another tree) nothing is removed.
pub fn delete_by_node<T, C>(
    arena: &mut Arena<T>,
    root: Option<u32>,
    cmp: &C,
    n: u32,
) -> (Option<u32>, Option<T>)
where
    C: Fn(&T, &T) -> bool,
{
    if !arena.contains(n) {
        return (root, None);
    }
    let probe = |arena: &Arena<T>, i: u32| {
        if i == n {
            return Some(Ordering::Equal);
        }
        let key = &arena[n].payload;
        let payload = &arena[i].payload;
        if cmp(key, payload) {
            Some(Ordering::Less)
        } else if cmp(payload, key) {
            Some(Ordering::Greater)
        } else {
            None
        }
    };
    let (root, removed) = delete_at(arena, root, &probe);
    (root, removed.map(|n| arena.release(n)))
}

/// Releases every node of the tree, children before parents, and clears
/// the handle. Safe to call on an empty handle.
pub fn delete_tree<T>(arena: &mut Arena<T>, root: &mut Option<u32>) {
    fn release_all<T>(arena: &mut Arena<T>, node: Option<u32>) -> usize {
        let Some(i) = node else {
            return 0;
        };
        let count = release_all(arena, get_l(arena, i)) + release_all(arena, get_r(arena, i));
        arena.release(i);
        count + 1
    }

    if let Some(i) = root.take() {
        let released = release_all(arena, Some(i));
        debug!(root = i, released, "tree torn down");
    }
}
