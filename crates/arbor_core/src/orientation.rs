//! Facing and rotation rules for placing child cells.

use crate::config::FacingRule;
use arbor_data::{Direction, Slot};

/// Maps a parent's facing and a gene slot to where the child goes and how it
/// faces.
pub trait Orientation {
    /// Direction from the parent cell to the child cell.
    fn target(&self, facing: Direction, slot: Slot) -> Direction;
    /// Facing given to the new child cell.
    fn child_facing(&self, facing: Direction, slot: Slot) -> Direction;
}

/// Slot rotation shared by both built-in rules.
fn turn(facing: Direction, slot: Slot) -> Direction {
    match slot {
        Slot::Left => facing.ccw(),
        Slot::Forward => facing,
        Slot::Right => facing.cw(),
    }
}

impl Orientation for FacingRule {
    fn target(&self, facing: Direction, slot: Slot) -> Direction {
        turn(facing, slot)
    }

    fn child_facing(&self, facing: Direction, slot: Slot) -> Direction {
        match self {
            FacingRule::Upright => facing,
            FacingRule::Turtle => turn(facing, slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upright_keeps_children_pointing_up() {
        let rule = FacingRule::Upright;
        assert_eq!(rule.target(Direction::North, Slot::Left), Direction::West);
        assert_eq!(rule.target(Direction::North, Slot::Forward), Direction::North);
        assert_eq!(rule.target(Direction::North, Slot::Right), Direction::East);
        for slot in Slot::ALL {
            assert_eq!(rule.child_facing(Direction::North, slot), Direction::North);
        }
    }

    #[test]
    fn test_turtle_children_face_growth_direction() {
        let rule = FacingRule::Turtle;
        for facing in Direction::ALL {
            for slot in Slot::ALL {
                assert_eq!(rule.child_facing(facing, slot), rule.target(facing, slot));
            }
        }
        assert_eq!(rule.target(Direction::East, Slot::Right), Direction::South);
    }
}
