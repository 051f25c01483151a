use tracing::debug;

use crate::arena::Arena;
use crate::error::{DuplicateKey, Error, Violation};
use crate::node::{balance, get_l, get_r, set_l, set_r, update_height};
use crate::rotate::{double_rotate_left, double_rotate_right, rotate_left, rotate_right};
use crate::traverse::Iter;

/// Default strict order for `T: PartialOrd`.
pub fn natural_less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Finds the node whose payload is equal to `key`.
///
/// Equality means neither `cmp(key, node)` nor `cmp(node, key)` holds.
pub fn search<T, C>(arena: &Arena<T>, root: Option<u32>, cmp: &C, key: &T) -> Option<u32>
where
    C: Fn(&T, &T) -> bool,
{
    let mut curr = root;
    while let Some(i) = curr {
        let payload = &arena[i].payload;
        curr = if cmp(key, payload) {
            get_l(arena, i)
        } else if cmp(payload, key) {
            get_r(arena, i)
        } else {
            return Some(i);
        };
    }
    None
}

/// Restores the height and balance of `t`, whose children are valid AVL
/// subtrees differing in height by at most 2. Returns the new subtree root.
///
/// A balanced heavy child takes the single rotation.
pub(crate) fn rebalance<T>(arena: &mut Arena<T>, t: u32) -> u32 {
    update_height(arena, t);
    let bf = balance(arena, t);
    if bf > 1 {
        let l = match get_l(arena, t) {
            Some(l) => balance(arena, l),
            None => 0,
        };
        if l >= 0 {
            rotate_left(arena, t)
        } else {
            double_rotate_left(arena, t)
        }
    } else if bf < -1 {
        let r = match get_r(arena, t) {
            Some(r) => balance(arena, r),
            None => 0,
        };
        if r <= 0 {
            rotate_right(arena, t)
        } else {
            double_rotate_right(arena, t)
        }
    } else {
        t
    }
}

fn insert_at<T, C>(
    arena: &mut Arena<T>,
    tree: Option<u32>,
    n: u32,
    cmp: &C,
) -> Result<u32, DuplicateKey>
where
    C: Fn(&T, &T) -> bool,
{
    let Some(t) = tree else {
        return Ok(n);
    };

    if cmp(&arena[n].payload, &arena[t].payload) {
        let l = insert_at(arena, get_l(arena, t), n, cmp)?;
        set_l(arena, t, Some(l));
    } else if cmp(&arena[t].payload, &arena[n].payload) {
        let r = insert_at(arena, get_r(arena, t), n, cmp)?;
        set_r(arena, t, Some(r));
    } else {
        return Err(DuplicateKey {
            existing: t,
            node: n,
        });
    }
    Ok(rebalance(arena, t))
}

/// Links a caller-allocated node into the tree and returns the new root.
///
/// `n` must be detached (no children, height 1), as handed out by
/// [`Arena::create`]. If a node with an equal key is already present the
/// tree is left untouched and `n` stays allocated. Passing a node that is
/// already linked reports it as its own duplicate (`existing == node`).
pub fn insert_node<T, C>(
    arena: &mut Arena<T>,
    root: Option<u32>,
    cmp: &C,
    n: u32,
) -> Result<u32, DuplicateKey>
where
    C: Fn(&T, &T) -> bool,
{
    insert_at(arena, root, n, cmp).inspect_err(|err| {
        debug!(existing = err.existing, node = err.node, "duplicate key rejected");
    })
}

/// Allocates a node for `payload` and links it. Returns the new root.
///
/// On a duplicate key the freshly allocated node is released again and
/// the tree is left untouched.
pub fn insert_value<T, C>(
    arena: &mut Arena<T>,
    root: Option<u32>,
    cmp: &C,
    payload: T,
) -> Result<u32, Error>
where
    C: Fn(&T, &T) -> bool,
{
    let n = arena.try_create(payload)?;
    match insert_node(arena, root, cmp, n) {
        Ok(root) => Ok(root),
        Err(dup) => {
            arena.release(dup.node);
            Err(dup.into())
        }
    }
}

/// Checks stored heights, the AVL balance bound and in-order sorting.
pub fn assert_avl_tree<T, C>(arena: &Arena<T>, root: Option<u32>, cmp: &C) -> Result<(), Violation>
where
    C: Fn(&T, &T) -> bool,
{
    fn validate_node<T>(arena: &Arena<T>, node: Option<u32>) -> Result<usize, Violation> {
        let Some(i) = node else {
            return Ok(0);
        };
        let n = arena.get(i).ok_or(Violation::DanglingHandle(i))?;
        let left = validate_node(arena, n.l)?;
        let right = validate_node(arena, n.r)?;
        let expected = 1 + left.max(right);
        if n.height != expected {
            return Err(Violation::HeightMismatch {
                node: i,
                stored: n.height,
                expected,
            });
        }
        if left.abs_diff(right) > 1 {
            return Err(Violation::Unbalanced { node: i, left, right });
        }
        Ok(expected)
    }

    validate_node(arena, root)?;

    let mut prev: Option<(u32, &T)> = None;
    for (i, payload) in Iter::new(arena, root) {
        if let Some((p, prev_payload)) = prev {
            if !cmp(prev_payload, payload) {
                return Err(Violation::OrderViolated { prev: p, node: i });
            }
        }
        prev = Some((i, payload));
    }
    Ok(())
}

/// Tree height bound for `n` nodes: `1.44 * log2(n + 2)`.
pub fn height_bound(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).floor() as usize
}
