use crate::model::state::SimEvent;
use crate::model::systems::{dispersal, lifecycle, light, reproduction};
use crate::model::world::World;
use std::time::Instant;

impl World {
    /// Advances the simulation by one tick and returns what happened.
    ///
    /// Phases run in a fixed order:
    /// 1. ageing, death and growth
    /// 2. light absorption
    /// 3. light propagation
    /// 4. reproduction
    /// 5. seed transport and germination
    ///
    /// Growth therefore sees last tick's energy while reproduction already
    /// sees light delivered this tick.
    pub fn update(&mut self) -> Vec<SimEvent> {
        let start = Instant::now();
        self.state.tick += 1;
        let mut events = Vec::new();

        lifecycle::run(&mut self.state, &mut events);
        light::absorb(&mut self.state, &mut events);
        light::propagate(&mut self.state, &mut events);
        reproduction::run(&mut self.state, &mut events);
        dispersal::run(&mut self.state, &mut events);

        self.finalize_tick(&mut events, start.elapsed());
        events
    }

    /// Runs `ticks` ticks back to back and returns all of their events.
    pub fn fast_forward(&mut self, ticks: u64) -> Vec<SimEvent> {
        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(self.update());
        }
        events
    }
}
