use super::cell::{CellIdx, PlantId};
use super::genome::NodeIdx;
use super::geometry::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of absorbed light walking towards its plant's seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightParticle {
    pub plant: PlantId,
    /// Cell the particle currently sits on.
    pub cell: CellIdx,
    /// Energy delivered on arrival before distance scaling.
    pub quantum: f64,
    /// Parent links traversed so far.
    pub steps: u32,
    /// Ticks to wait before the first move.
    pub pause: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedState {
    /// Riding the parent plant outwards from the root.
    Attached { plant: PlantId, node: NodeIdx },
    /// Detached and drifting over the grid.
    Airborne { pos: Position, steps: u32 },
}

/// Offspring in transit between release and germination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelingSeed {
    pub genome: Vec<u8>,
    pub lineage: Uuid,
    /// Generation the germinated plant will have.
    pub generation: u32,
    /// Starting energy granted on top of the configured initial energy.
    pub endowment: f64,
    pub state: SeedState,
}

impl TravelingSeed {
    /// Plant this seed still depends on, if any.
    pub fn anchor(&self) -> Option<PlantId> {
        match self.state {
            SeedState::Attached { plant, .. } => Some(plant),
            SeedState::Airborne { .. } => None,
        }
    }
}
