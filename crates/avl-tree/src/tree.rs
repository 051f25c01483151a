use std::fmt::Debug;

use tracing::debug;

use crate::arena::Arena;
use crate::config::{Config, DuplicatePolicy};
use crate::error::{Error, Violation};
use crate::node::{height, max, min};
use crate::print::print;
use crate::remove::{delete_by_node, delete_by_value, delete_tree};
use crate::traverse::{in_order, post_order, pre_order, Iter};
use crate::util::{assert_avl_tree, insert_node, natural_less, search};

/// AVL tree owning its node arena and comparator.
///
/// The free functions in [`util`](crate::util) and [`remove`](crate::remove)
/// work on a bare `(arena, root)` pair; this type keeps the two in sync and
/// applies the configured [`DuplicatePolicy`].
pub struct AvlTree<T, C = fn(&T, &T) -> bool>
where
    C: Fn(&T, &T) -> bool,
{
    root: Option<u32>,
    size: usize,
    comparator: C,
    config: Config,
    arena: Arena<T>,
}

impl<T> AvlTree<T, fn(&T, &T) -> bool>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(natural_less::<T>)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> bool>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config(comparator, Config::default())
    }

    pub fn with_config(comparator: C, config: Config) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            config,
            arena: Arena::with_capacity(config.capacity),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    /// Inserts `value`.
    ///
    /// Returns `Ok(None)` for a new key. For a key already present the
    /// outcome depends on the configured policy: `Reject` reports
    /// [`Error::DuplicateKey`], `Replace` returns the displaced payload.
    pub fn insert(&mut self, value: T) -> Result<Option<T>, Error> {
        let n = self.arena.try_create(value)?;
        self.link(n)
    }

    /// Allocates a detached node for [`insert_node`](Self::insert_node).
    pub fn create_node(&mut self, value: T) -> Result<u32, Error> {
        self.arena.try_create(value)
    }

    /// Splices a node obtained from [`create_node`](Self::create_node).
    ///
    /// A rejected duplicate is released along with its payload. A node that
    /// is already linked matches itself and is left in place, under either
    /// policy, with [`Error::DuplicateKey`] reported.
    pub fn insert_node(&mut self, n: u32) -> Result<Option<T>, Error> {
        self.link(n)
    }

    fn link(&mut self, n: u32) -> Result<Option<T>, Error> {
        match insert_node(&mut self.arena, self.root, &self.comparator, n) {
            Ok(root) => {
                self.root = Some(root);
                self.size += 1;
                Ok(None)
            }
            Err(dup) if dup.existing == dup.node => Err(dup.into()),
            Err(dup) => {
                let value = self.arena.release(dup.node);
                match self.config.duplicates {
                    DuplicatePolicy::Reject => Err(dup.into()),
                    DuplicatePolicy::Replace => {
                        debug!(node = dup.existing, "payload replaced");
                        Ok(Some(self.arena.set_payload(dup.existing, value)))
                    }
                }
            }
        }
    }

    /// Removes the node equal to `key` and returns its payload.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let (root, removed) = delete_by_value(&mut self.arena, self.root, &self.comparator, key);
        self.root = root;
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Removes node `n` if it belongs to this tree.
    pub fn remove_node(&mut self, n: u32) -> Option<T> {
        let (root, removed) = delete_by_node(&mut self.arena, self.root, &self.comparator, n);
        self.root = root;
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    pub fn find(&self, key: &T) -> Option<u32> {
        search(&self.arena, self.root, &self.comparator, key)
    }

    pub fn get(&self, key: &T) -> Option<&T> {
        self.find(key).map(|i| self.arena.payload(i))
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    pub fn payload(&self, n: u32) -> &T {
        self.arena.payload(n)
    }

    pub fn first(&self) -> Option<&T> {
        min(&self.arena, self.root).map(|i| self.arena.payload(i))
    }

    pub fn last(&self) -> Option<&T> {
        max(&self.arena, self.root).map(|i| self.arena.payload(i))
    }

    /// Number of linked nodes. Nodes made by `create_node` but not yet
    /// inserted are not counted.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    /// Releases every linked node.
    pub fn clear(&mut self) {
        delete_tree(&mut self.arena, &mut self.root);
        self.size = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        Iter::new(&self.arena, self.root).map(|(_, v)| v)
    }

    pub fn entries(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.root)
    }

    pub fn pre_order<X, F: FnMut(&T, &mut X)>(&self, ctx: &mut X, visit: F) {
        pre_order(&self.arena, self.root, ctx, visit);
    }

    pub fn in_order<X, F: FnMut(&T, &mut X)>(&self, ctx: &mut X, visit: F) {
        in_order(&self.arena, self.root, ctx, visit);
    }

    pub fn post_order<X, F: FnMut(&T, &mut X)>(&self, ctx: &mut X, visit: F) {
        post_order(&self.arena, self.root, ctx, visit);
    }

    pub fn validate(&self) -> Result<(), Violation> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn print(&self) -> String
    where
        T: Debug,
    {
        print(&self.arena, self.root, "")
    }
}
