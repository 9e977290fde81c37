use serde::{Deserialize, Serialize};

/// A wrapped grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Cardinal facing of a cell. North is towards `y - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Quarter turn clockwise.
    #[must_use]
    pub const fn cw(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Quarter turn counter-clockwise.
    #[must_use]
    pub const fn ccw(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Unit offset `(dx, dy)` for one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// One of the three child positions of a gene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Left,
    Forward,
    Right,
}

impl Slot {
    /// Traversal order used by both the genome codec and the growth engine.
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Forward, Slot::Right];

    /// Genome bit for this slot. A binary literal reads left-forward-right,
    /// so `0b010` is a node with only a forward child.
    pub const fn bit(self) -> u8 {
        match self {
            Slot::Left => 0b100,
            Slot::Forward => 0b010,
            Slot::Right => 0b001,
        }
    }

    /// Position in the `children` array of a gene node.
    pub const fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Forward => 1,
            Slot::Right => 2,
        }
    }
}
