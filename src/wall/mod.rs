//! Wall container and spatial index.
//!
//! The wall owns every brick for its lifetime: bricks are created once by a
//! bond generator, inserted here in validation order, and never removed.
//! Besides the flat brick list the wall keeps a (course row, column) index
//! for O(1) grid lookups.
//!
//! ## Overlap rule
//!
//! Two bricks count as overlapping unless they are separated horizontally by
//! at least the head joint, or separated vertically at all. The head joint
//! is enforced in the horizontal test only; the vertical test uses a plain
//! edge comparison with no bed-joint tolerance. This asymmetry is the
//! as-built behavior and is load-bearing for the bond generators, which
//! butt courses directly against the course-height step.

use crate::core::{Brick, BrickCatalog, BrickState, JointDims};
use crate::error::{IstakaError, PlacementReason, Result};
use std::collections::HashMap;

/// Spatial container of placed bricks.
#[derive(Debug, Clone)]
pub struct Wall {
    width: f64,
    height: f64,
    head_joint: f64,
    bed_joint: f64,
    /// Vertical pitch of one course: bed joint + full brick height
    course_height: f64,
    /// Horizontal pitch of one column: shortest brick length + head joint
    unit_width: f64,
    bricks: Vec<Brick>,
    /// (row, col) -> index into `bricks`
    grid: HashMap<(usize, usize), usize>,
}

impl Wall {
    /// Create an empty wall.
    pub fn new(width: f64, height: f64, catalog: &BrickCatalog, joints: &JointDims) -> Self {
        Self {
            width,
            height,
            head_joint: joints.head,
            bed_joint: joints.bed,
            course_height: joints.bed + catalog.full.height,
            unit_width: catalog.min_length() + joints.head,
            bricks: Vec::new(),
            grid: HashMap::new(),
        }
    }

    /// Wall width in mm.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Wall height in mm.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Vertical pitch of one course.
    #[inline]
    pub fn course_height(&self) -> f64 {
        self.course_height
    }

    /// All bricks in insertion order.
    #[inline]
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Mutable access to one brick, for state/stride updates.
    #[inline]
    pub fn brick_mut(&mut self, index: usize) -> &mut Brick {
        &mut self.bricks[index]
    }

    /// Insert a brick after checking bounds and overlap.
    ///
    /// A rejection means the generator and wall dimensions are inconsistent;
    /// callers treat it as a configuration error, not something to patch at
    /// runtime.
    pub fn try_add(&mut self, brick: Brick, catalog: &BrickCatalog) -> Result<()> {
        if !self.is_brick_in_wall(&brick, catalog) {
            return Err(IstakaError::Placement {
                id: brick.id,
                x: brick.position.x,
                y: brick.position.y,
                reason: PlacementReason::OutOfBounds,
            });
        }
        if !self.validate_placement(&brick, catalog) {
            return Err(IstakaError::Placement {
                id: brick.id,
                x: brick.position.x,
                y: brick.position.y,
                reason: PlacementReason::Overlap,
            });
        }
        self.add(brick);
        Ok(())
    }

    /// Insert a brick without re-checking validity.
    ///
    /// For callers that already guarantee a valid layout.
    pub fn add(&mut self, brick: Brick) {
        let row = self.row_of(brick.position.y);
        let col = self.column_of(brick.position.x);
        let index = self.bricks.len();
        self.bricks.push(brick);
        self.grid.insert((row, col), index);
    }

    /// Course row index for a Y coordinate.
    #[inline]
    pub fn row_of(&self, y: f64) -> usize {
        (y / self.course_height) as usize
    }

    /// Column index for an X coordinate.
    ///
    /// Generic unit-width tiling: columns advance by the shortest catalog
    /// length plus one head joint, independent of the course row.
    #[inline]
    pub fn column_of(&self, x: f64) -> usize {
        (x / self.unit_width) as usize
    }

    /// Whether the brick's box lies fully within the wall bounds.
    pub fn is_brick_in_wall(&self, brick: &Brick, catalog: &BrickCatalog) -> bool {
        brick.position.x >= 0.0
            && brick.right(catalog) <= self.width
            && brick.position.y >= 0.0
            && brick.top(catalog) <= self.height
    }

    /// Whether the brick can be placed without overlapping existing bricks.
    pub fn validate_placement(&self, brick: &Brick, catalog: &BrickCatalog) -> bool {
        self.bricks
            .iter()
            .all(|existing| !self.bricks_overlap(brick, existing, catalog))
    }

    /// Joint-aware overlap test. See the module docs for the exact rule.
    pub fn bricks_overlap(&self, a: &Brick, b: &Brick, catalog: &BrickCatalog) -> bool {
        !(a.right(catalog) + self.head_joint <= b.position.x
            || b.right(catalog) + self.head_joint <= a.position.x
            || a.top(catalog) <= b.position.y
            || b.top(catalog) <= a.position.y)
    }

    /// Brick covering a point, if any.
    pub fn brick_at(&self, x: f64, y: f64, catalog: &BrickCatalog) -> Option<&Brick> {
        self.bricks
            .iter()
            .find(|brick| brick.contains_point(catalog, x, y))
    }

    /// Brick at a grid cell, if any.
    pub fn brick_at_grid(&self, row: usize, col: usize) -> Option<&Brick> {
        self.grid.get(&(row, col)).map(|&index| &self.bricks[index])
    }

    /// All bricks whose computed row matches `course`.
    pub fn bricks_in_course(&self, course: usize) -> Vec<&Brick> {
        self.bricks
            .iter()
            .filter(|brick| self.row_of(brick.position.y) == course)
            .collect()
    }

    /// Number of whole courses that fit in the wall height.
    pub fn num_courses(&self) -> usize {
        (self.height / self.course_height) as usize
    }

    /// Total bricks inserted.
    #[inline]
    pub fn total_bricks(&self) -> usize {
        self.bricks.len()
    }

    /// Bricks already built.
    pub fn built_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks
            .iter()
            .filter(|brick| brick.state == BrickState::Built)
    }

    /// Bricks still planned.
    pub fn unbuilt_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks
            .iter()
            .filter(|brick| brick.state == BrickState::Planned)
    }

    /// Built-brick share, 0..=100. Zero for an empty wall.
    pub fn completion_percentage(&self) -> f64 {
        if self.bricks.is_empty() {
            return 0.0;
        }
        let built = self.built_bricks().count();
        built as f64 / self.bricks.len() as f64 * 100.0
    }

    /// Check the finished layout for wasted height and course-end gaps.
    ///
    /// Returns one finding per violation; empty means the wall is tight.
    pub fn validate_integrity(&self, catalog: &BrickCatalog) -> Vec<String> {
        let mut findings = Vec::new();

        let used_height = self.num_courses() as f64 * self.course_height;
        let remaining_height = self.height - used_height;
        if remaining_height > self.bed_joint {
            findings.push(format!(
                "wasted height of {:.1} mm above the top course",
                remaining_height
            ));
        }

        for course in 0..self.num_courses() {
            let course_bricks = self.bricks_in_course(course);
            let Some(rightmost) = course_bricks
                .iter()
                .max_by(|a, b| a.right(catalog).total_cmp(&b.right(catalog)))
            else {
                continue;
            };
            let remaining_space = self.width - rightmost.right(catalog);
            if remaining_space > 0.0 && (remaining_space - self.head_joint).abs() > 1e-9 {
                findings.push(format!(
                    "course {} ends {:.1} mm short of the wall edge",
                    course, remaining_space
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BrickDims, BrickKind, Position};

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

    fn joints() -> JointDims {
        JointDims {
            head: 10.0,
            bed: 12.5,
        }
    }

    fn wall() -> Wall {
        Wall::new(2300.0, 2000.0, &catalog(), &joints())
    }

    fn full_at(id: usize, x: f64, y: f64) -> Brick {
        Brick::new(id, BrickKind::Full, Position::new(x, y))
    }

    #[test]
    fn test_brick_in_wall_bounds() {
        let cat = catalog();
        let wall = wall();

        assert!(wall.is_brick_in_wall(&full_at(1, 100.0, 100.0), &cat));
        assert!(wall.is_brick_in_wall(&full_at(2, 0.0, 0.0), &cat));
        assert!(!wall.is_brick_in_wall(&full_at(3, -10.0, 100.0), &cat));
        assert!(!wall.is_brick_in_wall(&full_at(4, 2290.0, 100.0), &cat));
        assert!(!wall.is_brick_in_wall(&full_at(5, 100.0, 2010.0), &cat));
        assert!(!wall.is_brick_in_wall(&full_at(6, 100.0, -10.0), &cat));
    }

    #[test]
    fn test_exact_overlap_rejected() {
        let cat = catalog();
        let mut wall = wall();

        wall.try_add(full_at(0, 100.0, 100.0), &cat).unwrap();
        let err = wall.try_add(full_at(1, 100.0, 100.0), &cat).unwrap_err();
        assert!(matches!(
            err,
            IstakaError::Placement {
                id: 1,
                reason: PlacementReason::Overlap,
                ..
            }
        ));
    }

    #[test]
    fn test_head_joint_enforced_horizontally() {
        let cat = catalog();
        let mut wall = wall();
        wall.add(full_at(0, 100.0, 100.0));

        // One mm short of the head joint: rejected.
        let too_close = full_at(1, 100.0 + 210.0 - 1.0, 100.0);
        assert!(!wall.validate_placement(&too_close, &cat));

        // One mm past the head joint: accepted.
        let clear = full_at(2, 100.0 + 210.0 + 10.0 + 1.0, 100.0);
        assert!(wall.validate_placement(&clear, &cat));
    }

    #[test]
    fn test_vertical_separation_needs_no_joint() {
        let cat = catalog();
        let mut wall = wall();
        wall.add(full_at(0, 100.0, 100.0));

        // Directly on top: vertical edges touch, no joint required.
        let stacked = full_at(1, 100.0, 150.0);
        assert!(wall.validate_placement(&stacked, &cat));

        // Ten mm of vertical overlap: rejected.
        let sunk = full_at(2, 100.0, 140.0);
        assert!(!wall.validate_placement(&sunk, &cat));
    }

    #[test]
    fn test_column_calculation() {
        let wall = wall();
        let unit = 45.0 + 10.0;

        assert_eq!(wall.column_of(0.0), 0);
        assert_eq!(wall.column_of(3.0 * unit), 3);
        assert_eq!(wall.column_of(3.7 * unit), 3);
    }

    #[test]
    fn test_grid_lookup() {
        let mut wall = wall();
        let brick = full_at(7, 0.0, 62.5);
        wall.add(brick);

        let found = wall.brick_at_grid(1, 0).unwrap();
        assert_eq!(found.id, 7);
        assert!(wall.brick_at_grid(0, 0).is_none());
    }

    #[test]
    fn test_bricks_in_course() {
        let mut wall = wall();
        wall.add(full_at(0, 0.0, 0.0));
        wall.add(full_at(1, 220.0, 0.0));
        wall.add(full_at(2, 0.0, 62.5));

        assert_eq!(wall.bricks_in_course(0).len(), 2);
        assert_eq!(wall.bricks_in_course(1).len(), 1);
        assert!(wall.bricks_in_course(2).is_empty());
    }

    #[test]
    fn test_completion_percentage() {
        let mut wall = wall();
        assert_eq!(wall.completion_percentage(), 0.0);

        wall.add(full_at(0, 0.0, 0.0));
        wall.add(full_at(1, 220.0, 0.0));
        assert_eq!(wall.completion_percentage(), 0.0);

        wall.brick_mut(0).mark_built();
        assert_eq!(wall.completion_percentage(), 50.0);
        wall.brick_mut(1).mark_built();
        assert_eq!(wall.completion_percentage(), 100.0);
    }

    #[test]
    fn test_point_query() {
        let cat = catalog();
        let mut wall = wall();
        wall.add(full_at(3, 100.0, 100.0));

        assert_eq!(wall.brick_at(150.0, 120.0, &cat).unwrap().id, 3);
        assert!(wall.brick_at(500.0, 120.0, &cat).is_none());
    }

    #[test]
    fn test_num_courses() {
        // 2000 / 62.5 = 32 exactly
        assert_eq!(wall().num_courses(), 32);
    }
}
