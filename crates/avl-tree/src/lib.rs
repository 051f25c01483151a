//! Arena-backed AVL tree engine.
//!
//! Nodes live in an [`Arena`] and link to each other through `Option<u32>`
//! handles. The tree operations are free functions that take the arena and
//! the current root and return the new root, which the caller stores back
//! into its handle. [`AvlTree`] bundles an arena, a root and a comparator
//! for callers that do not need to manage handles themselves.
//!
//! Comparators are strict "less than" predicates, `Fn(&T, &T) -> bool`.
//! Two payloads are equal when neither is less than the other.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`arena`] | Node slot table with free-list recycling |
//! [`node`] | [`AvlNode`], `height` / `set_height`, `min` / `max`, `size` |
//! [`rotate`] | `rotate_left`, `rotate_right` and their double variants |
//! [`util`] | `search`, `insert_value`, `insert_node`, `assert_avl_tree` |
//! [`remove`] | `delete_by_value`, `delete_by_node`, `delete_tree` |
//! [`traverse`] | Pre-, in- and post-order walks, [`Iter`] |
//! [`print`] | Debug dump |
//! [`tree`] | [`AvlTree`] |
//!
//! # Example
//!
//! ```
//! use avl_tree::{delete_by_value, insert_node, insert_value, search, Arena};
//!
//! let less = |a: &i32, b: &i32| a < b;
//! let mut arena = Arena::new();
//!
//! let mut root = Some(insert_value(&mut arena, None, &less, 5).unwrap());
//! let ten = arena.create(10);
//! root = Some(insert_node(&mut arena, root, &less, ten).unwrap());
//! root = Some(insert_value(&mut arena, root, &less, 15).unwrap());
//! assert_eq!(root, Some(ten));
//!
//! let (root, removed) = delete_by_value(&mut arena, root, &less, &15);
//! assert_eq!(removed, Some(15));
//! assert!(search(&arena, root, &less, &15).is_none());
//! ```

pub mod arena;
pub mod config;
pub mod error;
pub mod node;
pub mod print;
pub mod remove;
pub mod rotate;
pub mod traverse;
pub mod tree;
pub mod util;

pub use arena::Arena;
pub use config::{Config, DuplicatePolicy};
pub use error::{DuplicateKey, Error, Violation};
pub use node::{height, max, min, set_height, size, subtree_height, AvlNode};
pub use remove::{delete_by_node, delete_by_value, delete_tree};
pub use rotate::{double_rotate_left, double_rotate_right, rotate_left, rotate_right};
pub use traverse::{in_order, post_order, pre_order, Iter};
pub use tree::AvlTree;
pub use util::{assert_avl_tree, height_bound, insert_node, insert_value, natural_less, search};
