//! Terminal rendering of the wall.
//!
//! One line per course, top course first. Planned bricks render as light
//! blocks, built bricks as dark blocks; block width is proportional to the
//! brick format.

use crate::core::{BrickKind, BrickState};
use crate::wall::Wall;

const PLANNED: &str = "░░";
const BUILT: &str = "▓▓";

/// Render the wall as course-per-line text.
pub fn render_ascii(wall: &Wall) -> String {
    let mut out = String::new();

    for course in (0..wall.num_courses()).rev() {
        let mut course_bricks = wall.bricks_in_course(course);
        if course_bricks.is_empty() {
            continue;
        }
        course_bricks.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        let mut line = String::new();
        for brick in course_bricks {
            let block = match brick.state {
                BrickState::Planned => PLANNED,
                BrickState::Built => BUILT,
            };
            let repeat = match brick.kind {
                BrickKind::Full => 2,
                BrickKind::Half => 1,
                BrickKind::Quarter => 1,
            };
            for _ in 0..repeat {
                line.push_str(block);
            }
            line.push(' ');
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Brick, BrickCatalog, BrickDims, BrickKind, JointDims, Position};

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

    #[test]
    fn test_courses_render_top_down() {
        let cat = catalog();
        let jnt = JointDims {
            head: 10.0,
            bed: 12.5,
        };
        let mut wall = Wall::new(2300.0, 2000.0, &cat, &jnt);
        wall.add(Brick::new(0, BrickKind::Full, Position::new(0.0, 0.0)));
        let mut built = Brick::new(1, BrickKind::Half, Position::new(0.0, 62.5));
        built.mark_built();
        wall.add(built);

        let text = render_ascii(&wall);
        let lines: Vec<&str> = text.lines().collect();

        // Course 1 (built half) renders above course 0 (planned full).
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "▓▓");
        assert_eq!(lines[1], "░░░░");
    }
}
