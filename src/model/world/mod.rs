use crate::model::config::SimConfig;
use crate::model::orientation::Orientation;
use crate::model::snapshot;
use crate::model::state::{CellView, PlantId, PlantStats, Position, WorldStats};
use crate::model::{Metrics, SimulationState};

pub mod finalize;
pub mod init;
pub mod update;

/// Owns a [`SimulationState`] and drives it one tick at a time.
pub struct World {
    pub state: SimulationState,
    /// Stats captured at the end of the last tick.
    pub last_stats: WorldStats,
}

impl World {
    pub fn tick(&self) -> u64 {
        self.state.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.state.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.state.metrics
    }

    pub fn width(&self) -> u16 {
        self.state.grid.cols()
    }

    pub fn height(&self) -> u16 {
        self.state.grid.rows()
    }

    /// Swaps the facing strategy used for all future growth.
    pub fn set_orientation(&mut self, orientation: Box<dyn Orientation>) {
        self.state.set_orientation(orientation);
    }

    pub fn cell_views(&self) -> Vec<CellView> {
        snapshot::cell_views(&self.state)
    }

    pub fn plant_stats(&self) -> Vec<PlantStats> {
        self.state.plants.values().map(snapshot::plant_stats).collect()
    }

    pub fn stats(&self) -> WorldStats {
        snapshot::world_stats(&self.state)
    }

    /// The plant owning the cell at `pos`, if any.
    pub fn plant_at(&self, pos: Position) -> Option<PlantStats> {
        self.state.plant_at(pos).map(snapshot::plant_stats)
    }

    pub fn plant(&self, id: PlantId) -> Option<PlantStats> {
        self.state.plants.get(&id).map(snapshot::plant_stats)
    }

    pub fn placement_digest(&self) -> String {
        snapshot::placement_digest(&self.state.placements)
    }
}
