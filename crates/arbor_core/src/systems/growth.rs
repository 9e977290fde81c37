//! Frontier-driven growth: at most one new cell per plant per tick.

use crate::grid::{Occupant, OccupancyGrid};
use crate::orientation::Orientation;
use arbor_data::{Cell, CellIdx, FrontierEntry, Plant, Position, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrowthOutcome {
    /// No energy and the free growth is already spent.
    Idle,
    /// A cell was placed at `pos`. `blocked` lists targets abandoned first.
    Grew {
        pos: Position,
        blocked: Vec<Position>,
    },
    /// The frontier ran dry without placing anything.
    Exhausted { blocked: Vec<Position> },
}

/// Appends `cell` to the plant and queues its present, ungrown child slots.
///
/// Does not touch the grid.
pub fn register_cell(plant: &mut Plant, cell: Cell) -> CellIdx {
    let idx = CellIdx(plant.cells.len() as u32);
    let node_idx = cell.node;
    plant.cells.push(cell);

    let node = plant.tree.node_mut(node_idx);
    node.cell = Some(idx);
    for slot in Slot::ALL {
        if node.child(slot).is_some() && !node.is_grown(slot) {
            plant.frontier.push(FrontierEntry {
                node: node_idx,
                slot,
            });
        }
    }
    idx
}

/// Tries the frontier newest-first until one child cell is placed.
///
/// A target is blocked when it is occupied or touches another plant's cell;
/// blocked slots are marked grown and dropped for good.
pub fn try_grow_one_step(
    plant: &mut Plant,
    grid: &mut OccupancyGrid,
    orientation: &dyn Orientation,
) -> GrowthOutcome {
    if plant.energy < 1.0 && plant.free_growth_used {
        return GrowthOutcome::Idle;
    }

    let mut blocked = Vec::new();
    let mut i = plant.frontier.len();
    while i > 0 {
        i -= 1;
        let entry = plant.frontier.remove(i);
        let node = plant.tree.node_mut(entry.node);
        node.mark_grown(entry.slot);
        let (Some(parent_idx), Some(child_node)) = (node.cell, node.child(entry.slot)) else {
            continue;
        };

        let parent = plant.cell(parent_idx);
        let (parent_pos, parent_facing) = (parent.pos, parent.facing);
        let target = grid.step(parent_pos, orientation.target(parent_facing, entry.slot));
        if !grid.is_empty(target) || grid.has_foreign_neighbor(target, plant.id) {
            blocked.push(target);
            continue;
        }

        if plant.free_growth_used {
            plant.energy -= 1.0;
        } else {
            plant.free_growth_used = true;
        }
        let facing = orientation.child_facing(parent_facing, entry.slot);
        let cell = Cell::stem(plant.id, target, child_node, parent_idx, facing);
        let idx = register_cell(plant, cell);
        grid.set(
            target,
            Occupant {
                plant: plant.id,
                cell: idx,
            },
        );
        return GrowthOutcome::Grew {
            pos: target,
            blocked,
        };
    }
    GrowthOutcome::Exhausted { blocked }
}
