use super::cell::{Cell, CellIdx, PlantId};
use super::genome::{GeneTree, NodeIdx};
use super::geometry::Slot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A child slot that may still be grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierEntry {
    pub node: NodeIdx,
    pub slot: Slot,
}

/// Reproduction state of a plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReproPhase {
    #[default]
    Idle,
    /// Saving towards releasing `child_genome`.
    Charging { child_genome: Vec<u8> },
}

/// A rooted plant: genome, grown cells and bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub lineage: Uuid,
    pub generation: u32,
    pub genome: Vec<u8>,
    pub tree: GeneTree,
    /// Grown cells. Index 0 is the seed.
    pub cells: Vec<Cell>,
    /// Unresolved growth candidates, oldest first.
    pub frontier: Vec<FrontierEntry>,
    pub energy: f64,
    pub phase: ReproPhase,
    pub age: u64,
    pub ticks_without_light: u64,
    /// Set once the plant has used its one energy-free growth.
    pub free_growth_used: bool,
    /// Tick on which the seed was planted or germinated.
    pub birth_tick: u64,
}

impl Plant {
    /// Builds a plant with no cells yet. The caller registers the seed.
    pub fn from_parts(
        id: PlantId,
        lineage: Uuid,
        generation: u32,
        genome: Vec<u8>,
        tree: GeneTree,
        energy: f64,
        birth_tick: u64,
    ) -> Self {
        Self {
            id,
            lineage,
            generation,
            genome,
            tree,
            cells: Vec::new(),
            frontier: Vec::new(),
            energy: energy.max(0.0),
            phase: ReproPhase::Idle,
            age: 0,
            ticks_without_light: 0,
            free_growth_used: false,
            birth_tick,
        }
    }

    #[inline]
    pub fn genome_len(&self) -> usize {
        self.genome.len()
    }

    pub fn cell(&self, idx: CellIdx) -> &Cell {
        &self.cells[idx.index()]
    }

    /// Number of parent links between `idx` and the seed.
    pub fn depth_of(&self, idx: CellIdx) -> usize {
        let mut depth = 0;
        let mut cursor = self.cell(idx).parent;
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.cell(parent).parent;
        }
        depth
    }
}
