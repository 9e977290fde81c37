use super::genome::NodeIdx;
use super::geometry::{Direction, Position};
use serde::{Deserialize, Serialize};

/// Stable identifier of a plant for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(pub u64);

/// Handle of a cell inside its plant's cell list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIdx(pub u32);

impl CellIdx {
    /// The seed is always the first cell a plant registers.
    pub const SEED: CellIdx = CellIdx(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Root of the plant. Never absorbs light.
    Seed,
    Stem,
}

/// A grown part of a plant occupying one grid square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub pos: Position,
    pub plant: PlantId,
    pub node: NodeIdx,
    /// Production parent. `None` only for the seed.
    pub parent: Option<CellIdx>,
    pub facing: Direction,
    /// Ticks left before this cell may absorb again.
    pub light_cooldown: u32,
}

impl Cell {
    pub fn seed(plant: PlantId, pos: Position, facing: Direction) -> Self {
        Self {
            kind: CellKind::Seed,
            pos,
            plant,
            node: NodeIdx::ROOT,
            parent: None,
            facing,
            light_cooldown: 0,
        }
    }

    pub fn stem(
        plant: PlantId,
        pos: Position,
        node: NodeIdx,
        parent: CellIdx,
        facing: Direction,
    ) -> Self {
        Self {
            kind: CellKind::Stem,
            pos,
            plant,
            node,
            parent: Some(parent),
            facing,
            light_cooldown: 0,
        }
    }

    pub fn is_seed(&self) -> bool {
        matches!(self.kind, CellKind::Seed)
    }
}
