use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by tree mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("key already present at node {existing}")]
    DuplicateKey { existing: u32 },
}

/// Returned by `insert_node` when a node with an equal key is already linked.
///
/// The tree is left untouched and `node` stays allocated but detached, so
/// the caller still owns it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("node {node} rejected: key already present at node {existing}")]
pub struct DuplicateKey {
    pub existing: u32,
    pub node: u32,
}

impl From<DuplicateKey> for Error {
    fn from(err: DuplicateKey) -> Self {
        Error::DuplicateKey {
            existing: err.existing,
        }
    }
}

/// Structural problems found by `assert_avl_tree`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("node {node} stores height {stored}, expected {expected}")]
    HeightMismatch {
        node: u32,
        stored: usize,
        expected: usize,
    },
    #[error("node {node} is unbalanced: left {left}, right {right}")]
    Unbalanced { node: u32, left: usize, right: usize },
    #[error("node {node} is out of order relative to node {prev}")]
    OrderViolated { prev: u32, node: u32 },
    #[error("handle {0} does not refer to a live node")]
    DanglingHandle(u32),
}
