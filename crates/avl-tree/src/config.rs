use serde::{Deserialize, Serialize};

/// What [`AvlTree`](crate::AvlTree) does when an inserted key is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Report [`Error::DuplicateKey`](crate::Error::DuplicateKey) and keep the tree as is.
    #[default]
    Reject,
    /// Swap the new payload into the existing node and return the old one.
    Replace,
}

/// Tree construction options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub duplicates: DuplicatePolicy,
    /// Node slots reserved up front.
    pub capacity: usize,
}

impl Config {
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
