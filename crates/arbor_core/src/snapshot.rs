//! Read-only views of the simulation for renderers and reports.

use crate::state::SimulationState;
use arbor_data::{CellView, PhaseKind, Plant, PlantStats, Position, ReproPhase, WorldStats};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Energy relative to the reproduction threshold, quantised to 0..=3.
pub fn energy_bucket(plant: &Plant) -> u8 {
    let threshold = plant.genome_len().max(1) as f64;
    ((plant.energy / threshold) * 3.0).floor().clamp(0.0, 3.0) as u8
}

/// One render tuple per live cell, plants in id order.
pub fn cell_views(state: &SimulationState) -> Vec<CellView> {
    let mut views = Vec::with_capacity(state.grid.occupied_count());
    for plant in state.plants.values() {
        let bucket = energy_bucket(plant);
        views.extend(plant.cells.iter().map(|cell| CellView {
            plant: plant.id,
            kind: cell.kind,
            pos: cell.pos,
            facing: cell.facing,
            energy_bucket: bucket,
        }));
    }
    views
}

pub fn plant_stats(plant: &Plant) -> PlantStats {
    PlantStats {
        id: plant.id,
        lineage: plant.lineage,
        generation: plant.generation,
        cells: plant.cells.len(),
        age: plant.age,
        birth_tick: plant.birth_tick,
        energy: plant.energy,
        phase: match plant.phase {
            ReproPhase::Idle => PhaseKind::Idle,
            ReproPhase::Charging { .. } => PhaseKind::Charging,
        },
    }
}

pub fn world_stats(state: &SimulationState) -> WorldStats {
    let lineages: HashSet<_> = state.plants.values().map(|p| p.lineage).collect();
    WorldStats {
        tick: state.tick,
        plants: state.plants.len(),
        cells: state.cell_count(),
        particles: state.particles.len(),
        seeds: state.seeds.len(),
        lineages: lineages.len(),
        max_generation: state
            .plants
            .values()
            .map(|p| p.generation)
            .max()
            .unwrap_or(0),
    }
}

/// SHA-256 over the placement history. Two runs with the same seed and
/// configuration produce the same digest.
pub fn placement_digest(placements: &[Position]) -> String {
    let mut hasher = Sha256::new();
    for pos in placements {
        hasher.update(pos.x.to_le_bytes());
        hasher.update(pos.y.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}
