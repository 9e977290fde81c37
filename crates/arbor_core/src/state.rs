//! The explicit simulation state every phase function operates on.

use crate::config::SimConfig;
use crate::error::Result;
use crate::genome;
use crate::grid::{Occupant, OccupancyGrid};
use crate::metrics::Metrics;
use crate::orientation::Orientation;
use crate::systems::growth;
use arbor_data::{Cell, Direction, LightParticle, Plant, PlantId, Position, TravelingSeed};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Grid, plants and in-flight transport for one run.
///
/// Plants are keyed by a monotonically increasing id, so iteration order is
/// birth order and therefore deterministic.
pub struct SimulationState {
    pub config: SimConfig,
    pub grid: OccupancyGrid,
    pub plants: BTreeMap<PlantId, Plant>,
    pub particles: Vec<LightParticle>,
    pub seeds: Vec<TravelingSeed>,
    pub rng: ChaCha8Rng,
    pub orientation: Box<dyn Orientation>,
    pub metrics: Metrics,
    pub tick: u64,
    /// Every square a cell was placed on, in placement order.
    pub placements: Vec<Position>,
    next_plant_id: u64,
}

impl SimulationState {
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            grid: OccupancyGrid::new(config.world.width, config.world.height),
            plants: BTreeMap::new(),
            particles: Vec::new(),
            seeds: Vec::new(),
            rng,
            orientation: Box::new(config.growth.facing),
            metrics: Metrics::new(),
            tick: 0,
            placements: Vec::new(),
            next_plant_id: 0,
            config,
        })
    }

    /// Fresh lineage id drawn from the simulation RNG.
    pub fn new_lineage(&mut self) -> Uuid {
        Uuid::from_u128(self.rng.gen())
    }

    /// Roots a new plant with its seed cell at `pos`.
    ///
    /// The caller is responsible for checking that `pos` is free.
    pub fn spawn_plant(
        &mut self,
        genome: Vec<u8>,
        pos: Position,
        lineage: Uuid,
        generation: u32,
        energy: f64,
    ) -> Result<PlantId> {
        let tree = genome::decode(&genome)?;
        let id = PlantId(self.next_plant_id);
        self.next_plant_id += 1;

        let mut plant = Plant::from_parts(id, lineage, generation, genome, tree, energy, self.tick);
        let seed = growth::register_cell(&mut plant, Cell::seed(id, pos, Direction::North));
        self.grid.set(pos, Occupant { plant: id, cell: seed });
        self.placements.push(pos);
        self.plants.insert(id, plant);
        Ok(id)
    }

    /// Removes a plant, its cells and everything in flight that refers to it.
    ///
    /// Returns `false` if the plant was already gone.
    pub fn kill_plant(&mut self, id: PlantId) -> bool {
        let Some(plant) = self.plants.remove(&id) else {
            return false;
        };
        for cell in &plant.cells {
            if self.grid.get(cell.pos).is_some_and(|occ| occ.plant == id) {
                self.grid.clear(cell.pos);
            }
        }
        self.particles.retain(|p| p.plant != id);
        self.seeds.retain(|s| s.anchor() != Some(id));
        true
    }

    /// Places up to `count` plants with the starting genome at random free
    /// spots. Returns how many were placed.
    pub fn place_random_plants(&mut self, count: usize) -> usize {
        let genome = self.config.genome.starting_genome.clone();
        let radius = self.config.dispersal.germination_radius;
        let energy = self.config.lifecycle.initial_energy;
        let attempts = self.config.world.placement_attempts;

        let mut planted = 0;
        for _ in 0..count {
            let spot = (0..attempts).find_map(|_| {
                let pos = Position::new(
                    self.rng.gen_range(0..self.grid.cols()),
                    self.rng.gen_range(0..self.grid.rows()),
                );
                (self.grid.is_empty(pos) && self.grid.neighbors_empty_in_radius(pos, radius))
                    .then_some(pos)
            });
            let Some(pos) = spot else {
                tracing::warn!(attempts, "no free spot for initial plant, skipping");
                continue;
            };
            let lineage = self.new_lineage();
            match self.spawn_plant(genome.clone(), pos, lineage, 0, energy) {
                Ok(_) => planted += 1,
                Err(err) => tracing::warn!(%err, "starting genome rejected"),
            }
        }
        planted
    }

    pub fn plant_at(&self, pos: Position) -> Option<&Plant> {
        self.grid
            .get(pos)
            .and_then(|occ| self.plants.get(&occ.plant))
    }

    pub fn cell_count(&self) -> usize {
        self.plants.values().map(|p| p.cells.len()).sum()
    }

    /// Replaces the facing strategy used by growth.
    pub fn set_orientation(&mut self, orientation: Box<dyn Orientation>) {
        self.orientation = orientation;
    }
}
