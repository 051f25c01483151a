//! Slot table holding every node of one or more trees.
//!
//! Nodes are addressed by `u32` handles. Released slots are pushed on a
//! free list and handed out again by the next [`Arena::create`], so a
//! handle is only meaningful while its node is live.

use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::error::Error;
use crate::node::AvlNode;

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(AvlNode<T>),
    Vacant,
}

#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Allocates a detached leaf holding `payload`.
    ///
    /// Fails without touching the arena when the slot table cannot grow.
    pub fn try_create(&mut self, payload: T) -> Result<u32, Error> {
        let node = AvlNode::new(payload);
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Occupied(node));
                (self.slots.len() - 1) as u32
            }
        };
        self.live += 1;
        Ok(idx)
    }

    /// Allocates a detached leaf holding `payload`.
    ///
    /// Panics if the slot table cannot grow, like any `Vec` push.
    pub fn create(&mut self, payload: T) -> u32 {
        let node = AvlNode::new(payload);
        self.live += 1;
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Frees the slot and hands back the payload.
    ///
    /// Links are not inspected: releasing a node that is still referenced
    /// by a parent leaves that parent with a dangling handle.
    pub fn release(&mut self, idx: u32) -> T {
        let slot = std::mem::replace(&mut self.slots[idx as usize], Slot::Vacant);
        match slot {
            Slot::Occupied(node) => {
                self.free.push(idx);
                self.live -= 1;
                trace!(node = idx, "released node");
                node.payload
            }
            Slot::Vacant => panic!("release of vacant node {idx}"),
        }
    }

    pub fn get(&self, idx: u32) -> Option<&AvlNode<T>> {
        match self.slots.get(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut AvlNode<T>> {
        match self.slots.get_mut(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn contains(&self, idx: u32) -> bool {
        self.get(idx).is_some()
    }

    pub fn payload(&self, idx: u32) -> &T {
        &self[idx].payload
    }

    pub fn payload_mut(&mut self, idx: u32) -> &mut T {
        &mut self[idx].payload
    }

    /// Swaps in a new payload without any reordering or rebalancing.
    ///
    /// The caller must keep the node's key consistent with its position.
    pub fn set_payload(&mut self, idx: u32, payload: T) -> T {
        std::mem::replace(&mut self[idx].payload, payload)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drops every node and forgets all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}

impl<T> Index<u32> for Arena<T> {
    type Output = AvlNode<T>;

    fn index(&self, idx: u32) -> &AvlNode<T> {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("access to vacant node {idx}"),
        }
    }
}

impl<T> IndexMut<u32> for Arena<T> {
    fn index_mut(&mut self, idx: u32) -> &mut AvlNode<T> {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("access to vacant node {idx}"),
        }
    }
}
