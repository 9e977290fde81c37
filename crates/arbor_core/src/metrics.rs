//! Running counters and structured logging for the simulation.

use arbor_data::{DeathCause, SimEvent, WorldStats};
use std::time::{Duration, Instant};

/// Cumulative counters for one run.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub ticks: u64,
    pub growths: u64,
    pub blocked: u64,
    pub absorptions: u64,
    pub deliveries: u64,
    pub energy_delivered: f64,
    pub seeds_released: u64,
    pub germinations: u64,
    pub failed_germinations: u64,
    pub deaths_old_age: u64,
    pub deaths_starvation: u64,
    pub reseeds: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ticks: 0,
            growths: 0,
            blocked: 0,
            absorptions: 0,
            deliveries: 0,
            energy_delivered: 0.0,
            seeds_released: 0,
            germinations: 0,
            failed_germinations: 0,
            deaths_old_age: 0,
            deaths_starvation: 0,
            reseeds: 0,
            start_time: Instant::now(),
        }
    }

    /// Folds a batch of events into the counters.
    pub fn observe(&mut self, events: &[SimEvent]) {
        for event in events {
            match event {
                SimEvent::Grew { .. } => self.growths += 1,
                SimEvent::GrowthBlocked { .. } => self.blocked += 1,
                SimEvent::Absorbed { .. } => self.absorptions += 1,
                SimEvent::LightDelivered { energy, .. } => {
                    self.deliveries += 1;
                    self.energy_delivered += energy;
                }
                SimEvent::ChargingStarted { .. } => {}
                SimEvent::SeedReleased { .. } => self.seeds_released += 1,
                SimEvent::Germinated { .. } => self.germinations += 1,
                SimEvent::GerminationFailed { .. } => self.failed_germinations += 1,
                SimEvent::Died { cause, .. } => match cause {
                    DeathCause::OldAge => self.deaths_old_age += 1,
                    DeathCause::Starvation => self.deaths_starvation += 1,
                },
                SimEvent::Reseeded { .. } => self.reseeds += 1,
            }
        }
    }

    /// Records a completed tick; logs a summary every `log_interval` ticks.
    pub fn record_tick(&mut self, duration: Duration, stats: &WorldStats, log_interval: u64) {
        self.ticks += 1;
        if self.ticks.is_multiple_of(log_interval) {
            tracing::info!(
                tick = stats.tick,
                plants = stats.plants,
                cells = stats.cells,
                particles = stats.particles,
                seeds = stats.seeds,
                lineages = stats.lineages,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn deaths(&self) -> u64 {
        self.deaths_old_age + self.deaths_starvation
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_data::{PlantId, Position};

    #[test]
    fn test_observe_counts_events() {
        let mut metrics = Metrics::new();
        metrics.observe(&[
            SimEvent::Grew {
                plant: PlantId(0),
                pos: Position::new(1, 1),
                tick: 1,
            },
            SimEvent::LightDelivered {
                plant: PlantId(0),
                energy: 1.5,
                steps: 2,
                tick: 1,
            },
            SimEvent::Died {
                plant: PlantId(0),
                age: 9,
                cells: 2,
                cause: DeathCause::Starvation,
                tick: 2,
            },
        ]);
        assert_eq!(metrics.growths, 1);
        assert_eq!(metrics.deliveries, 1);
        assert!((metrics.energy_delivered - 1.5).abs() < f64::EPSILON);
        assert_eq!(metrics.deaths(), 1);
        assert_eq!(metrics.deaths_starvation, 1);
    }

    #[test]
    fn test_record_tick_counts() {
        let mut metrics = Metrics::new();
        let stats = WorldStats::default();
        for _ in 0..3 {
            metrics.record_tick(Duration::from_millis(1), &stats, 2);
        }
        assert_eq!(metrics.ticks, 3);
    }
}
