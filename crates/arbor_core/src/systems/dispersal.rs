//! Seed travel: climb the parent plant, drift on the wind, then germinate.

use crate::state::SimulationState;
use arbor_data::{Direction, NodeIdx, PlantId, Position, SeedState, SimEvent, TravelingSeed};
use rand::Rng;

enum Move {
    Stay(SeedState),
    Land(Position),
    Drop,
}

/// Phase 5: move every seed once; landed seeds germinate or perish.
pub fn run(state: &mut SimulationState, events: &mut Vec<SimEvent>) {
    let budget = state.config.dispersal.airborne_steps;
    let mut i = state.seeds.len();
    while i > 0 {
        i -= 1;
        let current = state.seeds[i].state;
        let next = match current {
            SeedState::Attached { plant, node } => climb(state, plant, node),
            SeedState::Airborne { pos, steps } if steps < budget => {
                let dir = Direction::ALL[state.rng.gen_range(0..Direction::ALL.len())];
                Move::Stay(SeedState::Airborne {
                    pos: state.grid.step(pos, dir),
                    steps: steps + 1,
                })
            }
            SeedState::Airborne { pos, .. } => Move::Land(pos),
        };
        match next {
            Move::Stay(seed_state) => state.seeds[i].state = seed_state,
            Move::Land(pos) => {
                let seed = state.seeds.swap_remove(i);
                germinate(state, seed, pos, events);
            }
            Move::Drop => {
                state.seeds.swap_remove(i);
            }
        }
    }
}

/// Hops to a random grown child of `node`, or takes off from `node`'s cell
/// when it has none.
fn climb(state: &mut SimulationState, plant: PlantId, node: NodeIdx) -> Move {
    let Some(p) = state.plants.get(&plant) else {
        return Move::Drop;
    };
    let gene = p.tree.node(node);
    let grown: Vec<_> = gene
        .children
        .iter()
        .flatten()
        .copied()
        .filter(|child| p.tree.node(*child).cell.is_some())
        .collect();

    if grown.is_empty() {
        return match gene.cell {
            Some(cell) => Move::Stay(SeedState::Airborne {
                pos: p.cell(cell).pos,
                steps: 0,
            }),
            None => Move::Drop,
        };
    }
    let next = grown[state.rng.gen_range(0..grown.len())];
    Move::Stay(SeedState::Attached { plant, node: next })
}

fn germinate(
    state: &mut SimulationState,
    seed: TravelingSeed,
    pos: Position,
    events: &mut Vec<SimEvent>,
) {
    let tick = state.tick;
    let radius = state.config.dispersal.germination_radius;
    if !state.grid.is_empty(pos) || !state.grid.neighbors_empty_in_radius(pos, radius) {
        events.push(SimEvent::GerminationFailed { pos, tick });
        return;
    }

    let energy = state.config.lifecycle.initial_energy + seed.endowment;
    let (lineage, generation) = (seed.lineage, seed.generation);
    match state.spawn_plant(seed.genome, pos, lineage, generation, energy) {
        Ok(plant) => {
            tracing::debug!(plant = plant.0, generation, x = pos.x, y = pos.y, "seed germinated");
            events.push(SimEvent::Germinated {
                plant,
                lineage,
                generation,
                pos,
                tick,
            });
        }
        Err(err) => {
            tracing::warn!(%err, "discarding seed with malformed genome");
            events.push(SimEvent::GerminationFailed { pos, tick });
        }
    }
}
