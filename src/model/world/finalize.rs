use crate::model::snapshot;
use crate::model::state::SimEvent;
use crate::model::world::World;
use std::time::Duration;

impl World {
    /// End-of-tick bookkeeping: extinction reseed, stats and metrics.
    pub fn finalize_tick(&mut self, events: &mut Vec<SimEvent>, elapsed: Duration) {
        let tick = self.state.tick;
        let requested = self.state.config.world.initial_plants;
        if self.state.plants.is_empty() && self.state.seeds.is_empty() && requested > 0 {
            let planted = self.state.place_random_plants(requested);
            tracing::info!(tick, planted, requested, "Population extinct, reseeding");
            events.push(SimEvent::Reseeded {
                planted,
                requested,
                tick,
            });
        }

        self.last_stats = snapshot::world_stats(&self.state);
        let log_interval = self.state.config.world.log_interval;
        let metrics = &mut self.state.metrics;
        metrics.observe(events);
        metrics.record_tick(elapsed, &self.last_stats, log_interval);
    }
}
