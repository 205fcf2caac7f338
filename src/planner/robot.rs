//! Robot reach model.
//!
//! The robot lifts bricks from a fixed axis-aligned reach rectangle:
//! centered horizontally on its position, spanning upward from its feet by
//! the reach height. Reachability tests the brick's center point, not its
//! full bounding box, so a brick straddling the rectangle edge still counts
//! as reachable from the anchor nearest its center.

use crate::core::{Brick, BrickCatalog, BrickState, Position};
use crate::wall::Wall;

/// A reach-limited masonry robot.
#[derive(Debug, Clone)]
pub struct Robot {
    position: Position,
    reach_width: f64,
    reach_height: f64,
    movement_count: usize,
    current_stride: usize,
}

impl Robot {
    /// Create a robot at the canonical start position: first column anchor,
    /// ground level.
    pub fn new(reach_width: f64, reach_height: f64) -> Self {
        Self {
            position: Position::new(reach_width / 2.0, 0.0),
            reach_width,
            reach_height,
            movement_count: 0,
            current_stride: 0,
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Horizontal reach in mm.
    #[inline]
    pub fn reach_width(&self) -> f64 {
        self.reach_width
    }

    /// Vertical reach in mm.
    #[inline]
    pub fn reach_height(&self) -> f64 {
        self.reach_height
    }

    /// Relocations performed so far.
    #[inline]
    pub fn movement_count(&self) -> usize {
        self.movement_count
    }

    /// Stride counter, advanced on every relocation.
    #[inline]
    pub fn current_stride(&self) -> usize {
        self.current_stride
    }

    /// Current reach rectangle as (x_min, y_min, x_max, y_max).
    pub fn reach_area(&self) -> (f64, f64, f64, f64) {
        (
            self.position.x - self.reach_width / 2.0,
            self.position.y,
            self.position.x + self.reach_width / 2.0,
            self.position.y + self.reach_height,
        )
    }

    /// Whether the brick's center point falls inside the reach rectangle.
    pub fn can_reach(&self, brick: &Brick, catalog: &BrickCatalog) -> bool {
        let (x_min, y_min, x_max, y_max) = self.reach_area();
        let center = brick.center(catalog);
        x_min <= center.x && center.x <= x_max && y_min <= center.y && center.y <= y_max
    }

    /// Relocate the robot. Counters advance only when the position actually
    /// changes.
    pub fn move_to(&mut self, position: Position) {
        if position != self.position {
            self.movement_count += 1;
            self.current_stride += 1;
            self.position = position;
        }
    }

    /// All planned bricks reachable from the current position.
    pub fn reachable_bricks<'a>(&self, wall: &'a Wall, catalog: &BrickCatalog) -> Vec<&'a Brick> {
        wall.bricks()
            .iter()
            .filter(|brick| brick.state == BrickState::Planned && self.can_reach(brick, catalog))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BrickCatalog, BrickDims, BrickKind};

    fn catalog() -> BrickCatalog {
        BrickCatalog {
            full: BrickDims {
                length: 210.0,
                width: 100.0,
                height: 50.0,
            },
            half: BrickDims {
                length: 100.0,
                width: 100.0,
                height: 50.0,
            },
            quarter: BrickDims {
                length: 45.0,
                width: 100.0,
                height: 50.0,
            },
        }
    }

    fn full_at(x: f64, y: f64) -> Brick {
        Brick::new(0, BrickKind::Full, Position::new(x, y))
    }

    #[test]
    fn test_starts_at_first_anchor() {
        let robot = Robot::new(800.0, 1300.0);
        assert_eq!(robot.position(), Position::new(400.0, 0.0));
        assert_eq!(robot.movement_count(), 0);
    }

    #[test]
    fn test_can_reach_center_based() {
        let cat = catalog();
        let robot = Robot::new(800.0, 1300.0);

        // Center well inside the rectangle.
        assert!(robot.can_reach(&full_at(300.0, 50.0), &cat));

        // Center beyond horizontal reach.
        assert!(!robot.can_reach(&full_at(900.0, 50.0), &cat));

        // Center beyond vertical reach.
        assert!(!robot.can_reach(&full_at(400.0, 1500.0), &cat));
    }

    #[test]
    fn test_boundary_straddling_brick_is_reachable() {
        let cat = catalog();
        let robot = Robot::new(800.0, 1300.0);

        // Right edge at 905 pokes out of the rectangle (x_max = 800) but
        // the center at 800 is exactly on the boundary: reachable.
        let brick = full_at(695.0, 0.0);
        assert!(robot.can_reach(&brick, &cat));
    }

    #[test]
    fn test_move_to_counts_only_real_moves() {
        let mut robot = Robot::new(800.0, 1300.0);
        let start = robot.position();

        robot.move_to(start);
        assert_eq!(robot.movement_count(), 0);
        assert_eq!(robot.current_stride(), 0);

        robot.move_to(Position::new(1200.0, 0.0));
        assert_eq!(robot.movement_count(), 1);
        assert_eq!(robot.current_stride(), 1);
    }

    #[test]
    fn test_reach_area() {
        let robot = Robot::new(800.0, 1300.0);
        assert_eq!(robot.reach_area(), (0.0, 0.0, 800.0, 1300.0));
    }
}
