/// Asserts that no plant has negative energy.
#[macro_export]
macro_rules! assert_energy_non_negative {
    ($world:expr) => {
        for plant in $world.state.plants.values() {
            assert!(
                plant.energy >= 0.0,
                "Plant {:?} has negative energy {} at tick {}",
                plant.id,
                plant.energy,
                $world.tick()
            );
        }
    };
}

/// Asserts that no two cells of different plants touch, diagonals included.
#[macro_export]
macro_rules! assert_plants_separated {
    ($world:expr) => {
        let grid = &$world.state.grid;
        for plant in $world.state.plants.values() {
            for cell in &plant.cells {
                assert!(
                    !grid.has_foreign_neighbor(cell.pos, plant.id),
                    "Plant {:?} touches another plant at {:?} (tick {})",
                    plant.id,
                    cell.pos,
                    $world.tick()
                );
            }
        }
    };
}

/// Asserts that the grid and the plants' cell lists agree.
#[macro_export]
macro_rules! assert_grid_consistent {
    ($world:expr) => {
        let cells: usize = $world.state.plants.values().map(|p| p.cells.len()).sum();
        assert_eq!(
            $world.state.grid.occupied_count(),
            cells,
            "Occupied squares do not match live cells"
        );
        for plant in $world.state.plants.values() {
            for (i, cell) in plant.cells.iter().enumerate() {
                let occ = $world
                    .state
                    .grid
                    .get(cell.pos)
                    .expect("Live cell missing from grid");
                assert_eq!(occ.plant, plant.id);
                assert_eq!(occ.cell.0 as usize, i);
            }
        }
    };
}

/// Asserts the world holds exactly `$count` plants.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!(
            $world.state.plants.len(),
            $count,
            "Population count mismatch"
        );
    };
}
