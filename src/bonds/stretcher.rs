//! Stretcher (running) bond.
//!
//! Even courses tile full bricks from the left edge; odd courses lead with
//! a half brick so the vertical joints land mid-brick over the course
//! below. A course that cannot fit another full brick closes with a half
//! brick when one fits.

use super::CourseLayout;
use crate::core::{Brick, BrickCatalog, BrickKind, JointDims};
use crate::wall::Wall;

/// Lay out a stretcher bond for the wall.
pub fn generate(wall: &Wall, catalog: &BrickCatalog, joints: &JointDims) -> Vec<Brick> {
    let course_height = joints.bed + catalog.full.height;
    let full_length = catalog.full.length;
    let half_length = catalog.half.length;
    let full_height = catalog.full.height;
    let head = joints.head;

    let mut layout = CourseLayout::new();
    let num_courses = (wall.height() / course_height) as usize;

    for course in 0..num_courses {
        let y = course as f64 * course_height;
        if y + full_height > wall.height() {
            break;
        }

        let mut x = 0.0;

        // Odd courses lead with a half brick to offset the joints.
        if course % 2 == 1 && x + half_length <= wall.width() {
            layout.place(BrickKind::Half, x, y);
            x += half_length + head;
        }

        while x < wall.width() {
            let remaining = wall.width() - x;
            if remaining >= full_length {
                layout.place(BrickKind::Full, x, y);
                x += full_length + head;
            } else if remaining >= half_length {
                layout.place(BrickKind::Half, x, y);
                x += half_length + head;
            } else {
                break;
            }
        }
    }

    layout.into_bricks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonds::tests::{assert_layout_valid, catalog, joints, wall};

    #[test]
    fn test_course_count() {
        let bricks = generate(&wall(), &catalog(), &joints());
        let wall = assert_layout_valid(bricks);

        // 2000 / 62.5 = 32 courses, all of them populated.
        for course in 0..32 {
            assert!(!wall.bricks_in_course(course).is_empty());
        }
        assert!(wall.bricks_in_course(32).is_empty());
    }

    #[test]
    fn test_courses_fill_the_width() {
        let cat = catalog();
        let jnt = joints();
        let bricks = generate(&wall(), &cat, &jnt);
        let wall = assert_layout_valid(bricks);

        // Each course's bricks plus joints must come within one head joint
        // of the wall width.
        for course in 0..wall.num_courses() {
            let course_bricks = wall.bricks_in_course(course);
            let rightmost = course_bricks
                .iter()
                .map(|b| b.right(&cat))
                .fold(0.0_f64, f64::max);
            assert!(
                wall.width() - rightmost <= cat.half.length + jnt.head,
                "course {} ends at {}",
                course,
                rightmost
            );
        }
    }

    #[test]
    fn test_odd_courses_lead_with_half() {
        let cat = catalog();
        let bricks = generate(&wall(), &cat, &joints());
        let wall = assert_layout_valid(bricks);

        let first_in = |course: usize| {
            wall.bricks_in_course(course)
                .into_iter()
                .min_by(|a, b| a.position.x.total_cmp(&b.position.x))
                .unwrap()
                .kind
        };
        assert_eq!(first_in(0), BrickKind::Full);
        assert_eq!(first_in(1), BrickKind::Half);
        assert_eq!(first_in(2), BrickKind::Full);
    }

    #[test]
    fn test_deterministic() {
        let cat = catalog();
        let jnt = joints();
        let a = generate(&wall(), &cat, &jnt);
        let b = generate(&wall(), &cat, &jnt);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_are_sequential() {
        let bricks = generate(&wall(), &catalog(), &joints());
        for (index, brick) in bricks.iter().enumerate() {
            assert_eq!(brick.id, index);
        }
    }
}
