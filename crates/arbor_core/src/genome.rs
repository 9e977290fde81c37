//! Genome codec: flat byte sequences to and from ternary gene trees.
//!
//! A genome is read in pre-order. Each byte is one gene; its three low bits
//! say which of the left, forward and right children follow. Decoding and
//! encoding share the same traversal so `encode(decode(g)) == g` for every
//! well-formed genome.

use crate::config::{GenomeConfig, TipBias};
use crate::error::{GenomeError, Result};
use arbor_data::{GeneTree, NodeIdx, Slot, MASK_BITS};
use rand::Rng;

/// Decodes a genome into its gene tree.
///
/// Every byte becomes exactly one node, so on success the tree has as many
/// nodes as the genome has bytes.
pub fn decode(bytes: &[u8]) -> Result<GeneTree> {
    let Some(&root) = bytes.first() else {
        return Err(GenomeError::Empty);
    };

    let mut tree = GeneTree {
        nodes: Vec::with_capacity(bytes.len()),
    };
    tree.push(root);

    // (node, first slot position not yet inspected)
    let mut stack: Vec<(NodeIdx, usize)> = vec![(NodeIdx::ROOT, 0)];
    while let Some(top) = stack.last_mut() {
        let (parent, next) = *top;
        let mask = tree.node(parent).mask();
        let Some(pos) = (next..Slot::ALL.len()).find(|&i| mask & Slot::ALL[i].bit() != 0) else {
            stack.pop();
            continue;
        };
        top.1 = pos + 1;

        let Some(&byte) = bytes.get(tree.len()) else {
            return Err(GenomeError::Truncated {
                at: parent.index(),
            });
        };
        let child = tree.push(byte);
        tree.node_mut(parent).children[pos] = Some(child);
        stack.push((child, 0));
    }

    if tree.len() != bytes.len() {
        return Err(GenomeError::TrailingBytes {
            consumed: tree.len(),
            len: bytes.len(),
        });
    }
    Ok(tree)
}

/// Encodes the tree reachable from the root.
///
/// Mask bits are recomputed from the children actually present; the upper
/// bits of each byte are emitted unchanged.
pub fn encode(tree: &GeneTree) -> Vec<u8> {
    let mut out = Vec::with_capacity(tree.len());
    if tree.is_empty() {
        return out;
    }

    let mut stack = vec![NodeIdx::ROOT];
    while let Some(idx) = stack.pop() {
        let node = tree.node(idx);
        let mask = Slot::ALL
            .iter()
            .filter(|slot| node.child(**slot).is_some())
            .fold(0u8, |acc, slot| acc | slot.bit());
        out.push((node.byte & !MASK_BITS) | mask);

        for slot in Slot::ALL.iter().rev() {
            if let Some(child) = node.child(*slot) {
                stack.push(child);
            }
        }
    }
    out
}

pub fn is_well_formed(bytes: &[u8]) -> bool {
    decode(bytes).is_ok()
}

/// Picks a gene index in `0..len` according to the tip bias rule.
pub fn pick_gene<R: Rng>(len: usize, bias: TipBias, rng: &mut R) -> usize {
    match bias {
        TipBias::MaxOfTwo => {
            let u = rng.gen::<f64>().max(rng.gen::<f64>());
            (u * len as f64) as usize
        }
        TipBias::Uniform => rng.gen_range(0..len),
    }
}

/// Returns a copy of `genome` with at most one child slot flipped.
///
/// Removing a child that has children of its own is vetoed, so grown
/// structure is never cut away. Malformed input and out-of-range picks yield
/// an unchanged clone.
pub fn mutate<R: Rng>(genome: &[u8], config: &GenomeConfig, rng: &mut R) -> Vec<u8> {
    let Ok(mut tree) = decode(genome) else {
        return genome.to_vec();
    };

    let index = pick_gene(tree.len(), config.tip_bias, rng);
    if index >= tree.len() || (config.protect_root && index == 0) {
        return genome.to_vec();
    }

    let target = NodeIdx(index as u32);
    let slot = Slot::ALL[rng.gen_range(0..Slot::ALL.len())];
    match tree.node(target).child(slot) {
        Some(child) if tree.node(child).mask() != 0 => return genome.to_vec(),
        Some(_) => tree.node_mut(target).set_child(slot, None),
        None => {
            let byte = rng.gen::<u8>() & !MASK_BITS;
            let child = tree.push(byte);
            tree.node_mut(target).set_child(slot, Some(child));
        }
    }
    encode(&tree)
}

/// Lowercase hex form of a genome, used by the CLI and in logs.
pub fn to_hex(genome: &[u8]) -> String {
    hex::encode(genome)
}

/// Parses and validates a hex genome.
pub fn from_hex(hex_str: &str) -> anyhow::Result<Vec<u8>> {
    let bytes = hex::decode(hex_str.trim())?;
    decode(&bytes)?;
    Ok(bytes)
}
