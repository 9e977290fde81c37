//! Two-stage reproduction: charge towards a chosen child, then release it.

use crate::genome;
use crate::state::SimulationState;
use arbor_data::{NodeIdx, ReproPhase, SeedState, SimEvent, TravelingSeed};
use rand::Rng;

/// Phase 4: at most one reproduction transition per plant.
///
/// An idle plant whose energy reaches its genome length picks a child
/// genome. A charging plant releases the child as an attached seed once it
/// also covers the reproduction cost, which is debited.
pub fn run(state: &mut SimulationState, events: &mut Vec<SimEvent>) {
    let tick = state.tick;
    let cost_policy = state.config.reproduction.cost;
    for plant in state.plants.values_mut() {
        let threshold = plant.genome_len() as f64;
        match std::mem::take(&mut plant.phase) {
            ReproPhase::Idle => {
                if plant.energy < threshold {
                    continue;
                }
                let mutated = state.rng.gen_bool(state.config.genome.mutation_rate);
                let child_genome = if mutated {
                    genome::mutate(&plant.genome, &state.config.genome, &mut state.rng)
                } else {
                    plant.genome.clone()
                };
                events.push(SimEvent::ChargingStarted {
                    plant: plant.id,
                    child_len: child_genome.len(),
                    mutated,
                    tick,
                });
                plant.phase = ReproPhase::Charging { child_genome };
            }
            ReproPhase::Charging { child_genome } => {
                let cost = cost_policy.cost(child_genome.len());
                if plant.energy < threshold + cost {
                    plant.phase = ReproPhase::Charging { child_genome };
                    continue;
                }
                plant.energy -= cost;
                state.seeds.push(TravelingSeed {
                    genome: child_genome,
                    lineage: plant.lineage,
                    generation: plant.generation + 1,
                    endowment: cost_policy.endowment(),
                    state: SeedState::Attached {
                        plant: plant.id,
                        node: NodeIdx::ROOT,
                    },
                });
                tracing::debug!(plant = plant.id.0, cost, "seed released");
                events.push(SimEvent::SeedReleased {
                    plant: plant.id,
                    cost,
                    tick,
                });
            }
        }
    }
}
