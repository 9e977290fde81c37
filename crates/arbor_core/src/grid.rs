//! Toroidal occupancy grid.
//!
//! Every square holds at most one cell. Both axes wrap, so any integer offset
//! from a valid position lands on a valid position.

use arbor_data::{CellIdx, Direction, PlantId, Position};

/// Which plant cell sits on a grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub plant: PlantId,
    pub cell: CellIdx,
}

#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    cols: u16,
    rows: u16,
    cells: Vec<Option<Occupant>>,
    occupied: usize,
}

/// Moore ring offsets, excluding the center.
const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl OccupancyGrid {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
            occupied: 0,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Wraps an arbitrary integer coordinate onto the torus.
    #[inline]
    pub fn wrap(&self, x: i32, y: i32) -> Position {
        Position {
            x: x.rem_euclid(self.cols as i32) as u16,
            y: y.rem_euclid(self.rows as i32) as u16,
        }
    }

    #[inline]
    pub fn offset(&self, pos: Position, dx: i32, dy: i32) -> Position {
        self.wrap(pos.x as i32 + dx, pos.y as i32 + dy)
    }

    #[inline]
    pub fn step(&self, pos: Position, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        self.offset(pos, dx, dy)
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        let pos = self.wrap(pos.x as i32, pos.y as i32);
        (pos.y as usize * self.cols as usize) + pos.x as usize
    }

    pub fn get(&self, pos: Position) -> Option<Occupant> {
        self.cells[self.index(pos)]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Places an occupant and returns whatever was there before.
    pub fn set(&mut self, pos: Position, occupant: Occupant) -> Option<Occupant> {
        let idx = self.index(pos);
        let previous = self.cells[idx].replace(occupant);
        if previous.is_none() {
            self.occupied += 1;
        }
        previous
    }

    pub fn clear(&mut self, pos: Position) -> Option<Occupant> {
        let idx = self.index(pos);
        let previous = self.cells[idx].take();
        if previous.is_some() {
            self.occupied -= 1;
        }
        previous
    }

    /// True when every square in the `(2r+1)²` block around `pos`, except
    /// `pos` itself, is unoccupied.
    pub fn neighbors_empty_in_radius(&self, pos: Position, radius: u16) -> bool {
        let r = radius as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if !self.is_empty(self.offset(pos, dx, dy)) {
                    return false;
                }
            }
        }
        true
    }

    /// Number of empty squares among the four cardinal neighbours.
    pub fn open_cardinal_count(&self, pos: Position) -> usize {
        Direction::ALL
            .iter()
            .filter(|dir| self.is_empty(self.step(pos, **dir)))
            .count()
    }

    /// True when a Moore neighbour of `pos` belongs to a plant other than `plant`.
    pub fn has_foreign_neighbor(&self, pos: Position, plant: PlantId) -> bool {
        MOORE.iter().any(|&(dx, dy)| {
            self.get(self.offset(pos, dx, dy))
                .is_some_and(|occ| occ.plant != plant)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(plant: u64) -> Occupant {
        Occupant {
            plant: PlantId(plant),
            cell: CellIdx(0),
        }
    }

    #[test]
    fn test_wrap_negative_offsets() {
        let grid = OccupancyGrid::new(10, 8);
        assert_eq!(grid.wrap(-1, -1), Position::new(9, 7));
        assert_eq!(grid.wrap(10, 8), Position::new(0, 0));
        assert_eq!(grid.wrap(-21, 17), Position::new(9, 1));
        assert_eq!(
            grid.step(Position::new(0, 0), Direction::North),
            Position::new(0, 7)
        );
        assert_eq!(
            grid.step(Position::new(9, 3), Direction::East),
            Position::new(0, 3)
        );
    }

    #[test]
    fn test_set_get_clear_track_count() {
        let mut grid = OccupancyGrid::new(5, 5);
        let pos = Position::new(2, 3);
        assert!(grid.is_empty(pos));
        assert_eq!(grid.set(pos, occ(1)), None);
        assert_eq!(grid.get(pos), Some(occ(1)));
        assert_eq!(grid.occupied_count(), 1);

        assert_eq!(grid.set(pos, occ(2)), Some(occ(1)));
        assert_eq!(grid.occupied_count(), 1);

        assert_eq!(grid.clear(pos), Some(occ(2)));
        assert_eq!(grid.clear(pos), None);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_radius_check_wraps_and_skips_center() {
        let mut grid = OccupancyGrid::new(10, 10);
        let center = Position::new(0, 0);
        grid.set(center, occ(1));
        assert!(grid.neighbors_empty_in_radius(center, 2));

        grid.set(Position::new(8, 8), occ(2));
        assert!(!grid.neighbors_empty_in_radius(center, 2));
        assert!(grid.neighbors_empty_in_radius(center, 1));
    }

    #[test]
    fn test_open_cardinal_count() {
        let mut grid = OccupancyGrid::new(6, 6);
        let pos = Position::new(3, 3);
        assert_eq!(grid.open_cardinal_count(pos), 4);
        grid.set(Position::new(3, 2), occ(1));
        grid.set(Position::new(4, 4), occ(1));
        assert_eq!(grid.open_cardinal_count(pos), 3);
    }

    #[test]
    fn test_foreign_neighbor_detection() {
        let mut grid = OccupancyGrid::new(6, 6);
        let pos = Position::new(0, 0);
        grid.set(Position::new(1, 0), occ(1));
        assert!(!grid.has_foreign_neighbor(pos, PlantId(1)));
        grid.set(Position::new(5, 5), occ(2));
        assert!(grid.has_foreign_neighbor(pos, PlantId(1)));
        assert!(grid.has_foreign_neighbor(pos, PlantId(3)));
    }

    proptest::proptest! {
        #[test]
        fn test_wrap_always_lands_on_grid(
            cols in 1u16..200,
            rows in 1u16..200,
            x in -100_000i32..100_000,
            y in -100_000i32..100_000
        ) {
            let grid = OccupancyGrid::new(cols, rows);
            let pos = grid.wrap(x, y);
            proptest::prop_assert!(pos.x < cols && pos.y < rows);
            proptest::prop_assert_eq!(grid.offset(pos, cols as i32, -(rows as i32)), pos);
        }
    }
}
