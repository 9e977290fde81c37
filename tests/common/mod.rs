pub mod macros;

use arbor_lib::model::config::SimConfig;
use arbor_lib::model::state::{Position, SimEvent};
use arbor_lib::model::world::World;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    plants: Vec<(Vec<u8>, Position)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// Small seeded world with no random starting plants.
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.width = 40;
        config.world.height = 40;
        config.world.seed = Some(0);
        config.world.initial_plants = 0;
        Self {
            config,
            plants: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Immortal plants that never absorb light.
    pub fn without_light_or_death(self) -> Self {
        self.with_config(|c| {
            c.light.absorption_probability = 0.0;
            c.lifecycle.max_age_per_gene = 1_000_000;
            c.lifecycle.starvation_ticks = 1_000_000;
        })
    }

    pub fn with_plant(mut self, genome: &[u8], x: u16, y: u16) -> Self {
        self.plants.push((genome.to_vec(), Position::new(x, y)));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for (genome, pos) in self.plants {
            world
                .plant_seed(genome, pos)
                .expect("Failed to place plant in test builder");
        }
        world
    }
}

/// Events of one kind, in emission order.
#[allow(dead_code)]
pub fn count_events<F>(events: &[SimEvent], pred: F) -> usize
where
    F: Fn(&SimEvent) -> bool,
{
    events.iter().filter(|e| pred(e)).count()
}
