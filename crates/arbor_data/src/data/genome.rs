use super::cell::CellIdx;
use super::geometry::Slot;
use serde::{Deserialize, Serialize};

/// Low bits of a genome byte that flag the presence of child nodes.
pub const MASK_BITS: u8 = 0b111;

/// Handle of a node inside a [`GeneTree`] arena.
///
/// Node handles equal the pre-order position of the node, which is also the
/// index of its byte in the genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    pub const ROOT: NodeIdx = NodeIdx(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One decoded genome byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneNode {
    /// Raw genome byte. The upper five bits are carried untouched.
    pub byte: u8,
    /// Children in left, forward, right order.
    pub children: [Option<NodeIdx>; 3],
    /// Cell instantiated from this node, if it has grown.
    pub cell: Option<CellIdx>,
    /// Slots that have been attempted (grown or permanently blocked).
    pub grown: u8,
}

impl GeneNode {
    pub fn new(byte: u8) -> Self {
        Self {
            byte,
            children: [None; 3],
            cell: None,
            grown: 0,
        }
    }

    #[inline]
    pub fn mask(&self) -> u8 {
        self.byte & MASK_BITS
    }

    #[inline]
    pub fn child(&self, slot: Slot) -> Option<NodeIdx> {
        self.children[slot.index()]
    }

    #[inline]
    pub fn is_grown(&self, slot: Slot) -> bool {
        self.grown & slot.bit() != 0
    }

    pub fn mark_grown(&mut self, slot: Slot) {
        self.grown |= slot.bit();
    }

    /// Attaches or detaches a child and keeps the mask bit in sync.
    pub fn set_child(&mut self, slot: Slot, child: Option<NodeIdx>) {
        self.children[slot.index()] = child;
        if child.is_some() {
            self.byte |= slot.bit();
        } else {
            self.byte &= !slot.bit();
        }
    }
}

/// Arena holding a decoded genome. The root is always at index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneTree {
    pub nodes: Vec<GeneNode>,
}

impl GeneTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: NodeIdx) -> &GeneNode {
        &self.nodes[idx.index()]
    }

    pub fn node_mut(&mut self, idx: NodeIdx) -> &mut GeneNode {
        &mut self.nodes[idx.index()]
    }

    /// Appends a fresh node and returns its handle.
    pub fn push(&mut self, byte: u8) -> NodeIdx {
        let idx = NodeIdx(self.nodes.len() as u32);
        self.nodes.push(GeneNode::new(byte));
        idx
    }

    /// Number of nodes reachable from the root.
    pub fn reachable_count(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut count = 0;
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(idx) = stack.pop() {
            count += 1;
            stack.extend(self.node(idx).children.iter().flatten().copied());
        }
        count
    }
}
