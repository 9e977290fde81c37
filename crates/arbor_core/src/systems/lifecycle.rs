//! Ageing, death and the per-plant growth step.

use crate::config::LifecycleConfig;
use crate::state::SimulationState;
use crate::systems::growth::{self, GrowthOutcome};
use arbor_data::{DeathCause, Plant, PlantId, SimEvent};

/// Why `plant` should die this tick, if at all. Old age wins a tie.
pub fn death_cause(plant: &Plant, config: &LifecycleConfig) -> Option<DeathCause> {
    let max_age = config.max_age_per_gene * plant.genome_len() as u64;
    if plant.age >= max_age {
        Some(DeathCause::OldAge)
    } else if plant.ticks_without_light >= config.starvation_ticks {
        Some(DeathCause::Starvation)
    } else {
        None
    }
}

/// Phase 1: age every plant, remove the dead, grow the survivors.
pub fn run(state: &mut SimulationState, events: &mut Vec<SimEvent>) {
    let tick = state.tick;
    let ids: Vec<PlantId> = state.plants.keys().copied().collect();
    for id in ids {
        let Some(plant) = state.plants.get_mut(&id) else {
            continue;
        };
        plant.age += 1;
        plant.ticks_without_light += 1;

        if let Some(cause) = death_cause(plant, &state.config.lifecycle) {
            let (age, cells) = (plant.age, plant.cells.len());
            state.kill_plant(id);
            tracing::debug!(plant = id.0, age, ?cause, "plant died");
            events.push(SimEvent::Died {
                plant: id,
                age,
                cells,
                cause,
                tick,
            });
            continue;
        }

        let outcome =
            growth::try_grow_one_step(plant, &mut state.grid, state.orientation.as_ref());
        let blocked = match outcome {
            GrowthOutcome::Idle => continue,
            GrowthOutcome::Grew { pos, blocked } => {
                tracing::debug!(plant = id.0, x = pos.x, y = pos.y, "plant grew");
                state.placements.push(pos);
                events.push(SimEvent::Grew {
                    plant: id,
                    pos,
                    tick,
                });
                blocked
            }
            GrowthOutcome::Exhausted { blocked } => blocked,
        };
        events.extend(
            blocked
                .into_iter()
                .map(|pos| SimEvent::GrowthBlocked { plant: id, pos, tick }),
        );
    }
}
