//! Read-only snapshots handed to renderers and tools.

use super::cell::{CellKind, PlantId};
use super::geometry::{Direction, Position};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-cell render tuple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub plant: PlantId,
    pub kind: CellKind,
    pub pos: Position,
    pub facing: Direction,
    /// Owning plant's energy relative to its reproduction threshold, 0..=3.
    pub energy_bucket: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseKind {
    Idle,
    Charging,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantStats {
    pub id: PlantId,
    pub lineage: Uuid,
    pub generation: u32,
    pub cells: usize,
    pub age: u64,
    pub birth_tick: u64,
    pub energy: f64,
    pub phase: PhaseKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    pub tick: u64,
    pub plants: usize,
    pub cells: usize,
    pub particles: usize,
    pub seeds: usize,
    pub lineages: usize,
    pub max_generation: u32,
}
