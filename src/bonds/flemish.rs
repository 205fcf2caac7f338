//! Flemish bond.
//!
//! Every course alternates full and half bricks. Even courses start the
//! cycle on a full brick and close with a quarter when nothing larger fits.
//! Odd courses open with a half and a quarter to shift the joints, run the
//! same full/half cycle, and end on an explicit quarter-then-half closing
//! pattern reserved at the right edge.

use super::CourseLayout;
use crate::core::{Brick, BrickCatalog, BrickKind, JointDims};
use crate::wall::Wall;

/// Lay out a flemish bond for the wall.
pub fn generate(wall: &Wall, catalog: &BrickCatalog, joints: &JointDims) -> Vec<Brick> {
    let course_height = joints.bed + catalog.full.height;
    let full_length = catalog.full.length;
    let half_length = catalog.half.length;
    let quarter_length = catalog.quarter.length;
    let head = joints.head;

    let mut layout = CourseLayout::new();
    let num_courses = (wall.height() / course_height) as usize;

    for course in 0..num_courses {
        let y = course as f64 * course_height;
        if y + catalog.full.height > wall.height() {
            break;
        }

        let mut x = 0.0;

        if course % 2 == 0 {
            // Full, half, full, half, ... with a quarter closer.
            let mut step = 0usize;
            loop {
                if x >= wall.width() {
                    break;
                }
                let want_full = step % 2 == 0;
                if want_full && x + full_length <= wall.width() {
                    layout.place(BrickKind::Full, x, y);
                    x += full_length + head;
                } else if !want_full && x + half_length <= wall.width() {
                    layout.place(BrickKind::Half, x, y);
                    x += half_length + head;
                } else {
                    if x + quarter_length <= wall.width() {
                        layout.place(BrickKind::Quarter, x, y);
                    }
                    break;
                }
                step += 1;
            }
        } else {
            // Opening pattern: half, quarter.
            if x + half_length <= wall.width() {
                layout.place(BrickKind::Half, x, y);
                x += half_length + head;
            }
            if x + quarter_length <= wall.width() {
                layout.place(BrickKind::Quarter, x, y);
                x += quarter_length + head;
            }

            // Full/half cycle, leaving room for the closing pattern.
            let closing_space = quarter_length + head + half_length;
            let limit = wall.width() - closing_space;
            let mut step = 0usize;
            while x < limit {
                let want_full = step % 2 == 0;
                if want_full && x + full_length + head <= limit {
                    layout.place(BrickKind::Full, x, y);
                    x += full_length + head;
                } else if !want_full && x + half_length + head <= limit {
                    layout.place(BrickKind::Half, x, y);
                    x += half_length + head;
                } else {
                    break;
                }
                step += 1;
            }

            // Closing pattern: quarter, half.
            if x + quarter_length <= wall.width() {
                layout.place(BrickKind::Quarter, x, y);
                x += quarter_length + head;

                if x + half_length <= wall.width() {
                    layout.place(BrickKind::Half, x, y);
                }
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
    fn test_layout_is_valid() {
        let bricks = generate(&wall(), &catalog(), &joints());
        let wall = assert_layout_valid(bricks);
        assert_eq!(wall.num_courses(), 32);
        for course in 0..32 {
            assert!(!wall.bricks_in_course(course).is_empty());
        }
    }

    #[test]
    fn test_even_course_alternates() {
        let bricks = generate(&wall(), &catalog(), &joints());
        let wall = assert_layout_valid(bricks);

        let mut course0 = wall.bricks_in_course(0);
        course0.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        let kinds: Vec<_> = course0.iter().map(|b| b.kind).collect();

        // Leading bricks alternate full/half; the tail may close early.
        assert_eq!(kinds[0], BrickKind::Full);
        assert_eq!(kinds[1], BrickKind::Half);
        assert_eq!(kinds[2], BrickKind::Full);
        assert_eq!(kinds[3], BrickKind::Half);
    }

    #[test]
    fn test_odd_course_opening_and_closing() {
        let bricks = generate(&wall(), &catalog(), &joints());
        let wall = assert_layout_valid(bricks);

        let mut course1 = wall.bricks_in_course(1);
        course1.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        let kinds: Vec<_> = course1.iter().map(|b| b.kind).collect();

        assert_eq!(kinds[0], BrickKind::Half);
        assert_eq!(kinds[1], BrickKind::Quarter);
        assert_eq!(kinds[kinds.len() - 2], BrickKind::Quarter);
        assert_eq!(kinds[kinds.len() - 1], BrickKind::Half);
    }

    #[test]
    fn test_deterministic() {
        let cat = catalog();
        let jnt = joints();
        assert_eq!(generate(&wall(), &cat, &jnt), generate(&wall(), &cat, &jnt));
    }
}
