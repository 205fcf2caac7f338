//! English cross bond.
//!
//! Even courses are all stretchers (full bricks) with a half or quarter
//! closer at the edge. Odd courses are headers laid as half bricks, opened
//! by a half-quarter pair and closed by a quarter-half pair so the cross
//! joints never stack.

use super::CourseLayout;
use crate::core::{Brick, BrickCatalog, BrickKind, JointDims};
use crate::wall::Wall;

/// Lay out an english cross bond for the wall.
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
            // All full bricks, then the largest closer that fits.
            while x < wall.width() {
                let remaining = wall.width() - x;
                if remaining >= full_length {
                    layout.place(BrickKind::Full, x, y);
                    x += full_length + head;
                } else {
                    if remaining >= half_length {
                        layout.place(BrickKind::Half, x, y);
                    } else if remaining >= quarter_length {
                        layout.place(BrickKind::Quarter, x, y);
                    }
                    break;
                }
            }
        } else {
            // Opening pair: half, quarter.
            if x + half_length <= wall.width() {
                layout.place(BrickKind::Half, x, y);
                x += half_length + head;
            }
            if x + quarter_length <= wall.width() {
                layout.place(BrickKind::Quarter, x, y);
                x += quarter_length + head;
            }

            // Half bricks until only the closing pair fits.
            while x < wall.width() {
                let remaining = wall.width() - x;
                let closing_space = quarter_length + head + half_length;

                if remaining >= closing_space {
                    let remaining_after_half = remaining - (half_length + head);
                    if remaining_after_half < closing_space {
                        // Closing pair: quarter, then the final half.
                        layout.place(BrickKind::Quarter, x, y);
                        x += quarter_length + head;
                        layout.place(BrickKind::Half, x, y);
                        break;
                    }
                    layout.place(BrickKind::Half, x, y);
                    x += half_length + head;
                } else if remaining >= half_length {
                    layout.place(BrickKind::Half, x, y);
                    break;
                } else if remaining >= quarter_length {
                    layout.place(BrickKind::Quarter, x, y);
                    break;
                } else {
                    break;
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
        for course in 0..wall.num_courses() {
            assert!(!wall.bricks_in_course(course).is_empty());
        }
    }

    #[test]
    fn test_even_courses_are_stretchers() {
        let bricks = generate(&wall(), &catalog(), &joints());
        let wall = assert_layout_valid(bricks);

        let mut course0 = wall.bricks_in_course(0);
        course0.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        // Every brick but the closer is full.
        for brick in &course0[..course0.len() - 1] {
            assert_eq!(brick.kind, BrickKind::Full);
        }
    }

    #[test]
    fn test_odd_course_opening_and_closing_pairs() {
        let bricks = generate(&wall(), &catalog(), &joints());
        let wall = assert_layout_valid(bricks);

        let mut course1 = wall.bricks_in_course(1);
        course1.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        let kinds: Vec<_> = course1.iter().map(|b| b.kind).collect();

        assert_eq!(kinds[0], BrickKind::Half);
        assert_eq!(kinds[1], BrickKind::Quarter);
        assert_eq!(kinds[kinds.len() - 2], BrickKind::Quarter);
        assert_eq!(kinds[kinds.len() - 1], BrickKind::Half);

        // Everything between the opening and closing pairs is a half brick.
        for kind in &kinds[2..kinds.len() - 2] {
            assert_eq!(*kind, BrickKind::Half);
        }
    }

    #[test]
    fn test_deterministic() {
        let cat = catalog();
        let jnt = joints();
        assert_eq!(generate(&wall(), &cat, &jnt), generate(&wall(), &cat, &jnt));
    }
}
