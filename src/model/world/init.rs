use crate::model::config::SimConfig;
use crate::model::snapshot;
use crate::model::state::{PlantId, Position};
use crate::model::world::World;
use crate::model::SimulationState;

impl World {
    /// Builds a world and scatters `initial_plants` starting plants.
    ///
    /// Fails only when the configuration does not validate.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        let initial = config.world.initial_plants;
        let mut state = SimulationState::new(config)?;
        let planted = state.place_random_plants(initial);
        tracing::info!(
            width = state.grid.cols(),
            height = state.grid.rows(),
            planted,
            requested = initial,
            fingerprint = %state.config.fingerprint(),
            "World created"
        );
        let last_stats = snapshot::world_stats(&state);
        Ok(Self { state, last_stats })
    }

    /// Loads a TOML configuration and builds the world from it.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Self::new(SimConfig::from_toml(content)?)
    }

    /// Plants `genome` at `pos` as the founder of a new lineage.
    ///
    /// The square and its Moore ring must be empty.
    pub fn plant_seed(&mut self, genome: Vec<u8>, pos: Position) -> anyhow::Result<PlantId> {
        let pos = self.state.grid.wrap(pos.x as i32, pos.y as i32);
        anyhow::ensure!(
            self.state.grid.is_empty(pos),
            "square ({}, {}) is already occupied",
            pos.x,
            pos.y
        );
        anyhow::ensure!(
            self.state.grid.neighbors_empty_in_radius(pos, 1),
            "square ({}, {}) touches another plant",
            pos.x,
            pos.y
        );
        let lineage = self.state.new_lineage();
        let energy = self.state.config.lifecycle.initial_energy;
        let id = self.state.spawn_plant(genome, pos, lineage, 0, energy)?;
        self.last_stats = snapshot::world_stats(&self.state);
        Ok(id)
    }
}
