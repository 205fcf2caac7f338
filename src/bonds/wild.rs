//! Wild bond (wildverband).
//!
//! The only randomized pattern: each course mixes full and half bricks
//! under three constraints carried over from hand-laid wild bond practice:
//!
//! 1. no two consecutive half bricks,
//! 2. a full brick is forced after 6 consecutive staggered steps (a joint
//!    landing less than one half-brick length from the previous joint),
//! 3. no joint within 1 mm of a joint in the course below.
//!
//! Randomness comes from a salt drawn once from a seeded [`StdRng`]; the
//! candidate index is otherwise a deterministic function of the course
//! number and the cursor position, so identical (seed, configuration)
//! reproduces an identical brick sequence.

use super::CourseLayout;
use crate::core::{Brick, BrickCatalog, BrickKind, JointDims};
use crate::wall::Wall;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lay out a wild bond for the wall.
pub fn generate(wall: &Wall, catalog: &BrickCatalog, joints: &JointDims, seed: u64) -> Vec<Brick> {
    let course_height = joints.bed + catalog.full.height;
    let num_courses = (wall.height() / course_height) as usize;
    let salt = StdRng::seed_from_u64(seed).random::<u32>() as usize;

    let mut layout = CourseLayout::new();
    let mut previous_joints: Vec<f64> = Vec::new();

    for course in 0..num_courses {
        let y = course as f64 * course_height;
        if y + catalog.full.height > wall.height() {
            break;
        }

        let (pattern, joint_positions) =
            course_pattern(course, wall.width(), catalog, joints, &previous_joints, salt);

        let mut x = 0.0;
        for kind in pattern {
            layout.place(kind, x, y);
            x += catalog.dims(kind).length + joints.head;
        }

        previous_joints = joint_positions;
    }

    layout.into_bricks()
}

/// Pick the brick sequence for one course.
///
/// Returns the pattern and the head-joint X positions it produces; the
/// latter feed the alignment check of the course above.
fn course_pattern(
    course: usize,
    wall_width: f64,
    catalog: &BrickCatalog,
    joints: &JointDims,
    previous_joints: &[f64],
    salt: usize,
) -> (Vec<BrickKind>, Vec<f64>) {
    let full = catalog.full.length;
    let half = catalog.half.length;
    let quarter = catalog.quarter.length;
    let head = joints.head;

    let mut pattern: Vec<BrickKind> = Vec::new();
    let mut joint_positions: Vec<f64> = Vec::new();
    let mut x = 0.0;
    let mut consecutive_steps = 0usize;

    // Odd courses open with a quarter-brick offset.
    if course % 2 == 1 {
        pattern.push(BrickKind::Quarter);
        x += quarter + head;
        joint_positions.push(quarter);
    }

    while x + half <= wall_width {
        let remaining = wall_width - x;

        let mut options: Vec<BrickKind> = Vec::new();
        if remaining >= full + head {
            options.push(BrickKind::Full);
        }
        if remaining >= half + head {
            options.push(BrickKind::Half);
        }
        if remaining < full + head {
            if remaining >= half {
                options = vec![BrickKind::Half];
            } else {
                break;
            }
        }

        // No two consecutive half bricks.
        if pattern.last() == Some(&BrickKind::Half) {
            options.retain(|kind| *kind != BrickKind::Half);
        }

        if options.is_empty() {
            if remaining >= quarter {
                pattern.push(BrickKind::Quarter);
                joint_positions.push(x + quarter);
            }
            break;
        }

        let mut kind;
        if consecutive_steps >= 6 && options.contains(&BrickKind::Full) {
            kind = BrickKind::Full;
            consecutive_steps = 0;
        } else {
            let index = (course + (x / 100.0) as usize + salt) % options.len();
            kind = options[index];
        }

        let mut joint = x + catalog.dims(kind).length;

        // A joint within 1 mm of a previous-course joint would stack; swap
        // to the other candidate when one exists.
        let aligned = previous_joints
            .iter()
            .any(|previous| (joint - previous).abs() < 1.0);
        if aligned && options.len() > 1 {
            let other = match kind {
                BrickKind::Full => BrickKind::Half,
                _ => BrickKind::Full,
            };
            if options.contains(&other) {
                kind = other;
                joint = x + catalog.dims(kind).length;
            }
        }

        pattern.push(kind);
        joint_positions.push(joint);
        x = joint + head;

        if joint_positions.len() >= 2 {
            let step =
                (joint_positions[joint_positions.len() - 1] - joint_positions[joint_positions.len() - 2]).abs();
            if step < half {
                consecutive_steps += 1;
            } else {
                consecutive_steps = 0;
            }
        }
    }

    // Quarter filler for any fractional remainder.
    let remaining = wall_width - x;
    if remaining >= quarter {
        pattern.push(BrickKind::Quarter);
        joint_positions.push(x + quarter);
    }

    (pattern, joint_positions)
}
