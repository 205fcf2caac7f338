//! Grid-scan build planner.
//!
//! Scans a fixed grid of robot anchors in a boustrophedon order: rows
//! bottom to top, columns left-to-right on even rows and right-to-left on
//! odd rows. At each anchor every still-unassigned brick whose center is
//! reachable joins a new stride; anchors that reach nothing leave no
//! record. There is no backtracking: a brick no anchor can reach stays
//! planned and is reported as the coverage gap, picking compatible reach
//! dimensions is the caller's job.

use crate::core::{BrickCatalog, Movement, Position};
use crate::planner::{Robot, Stride, StrideManager};
use crate::wall::Wall;
use log::{info, warn};

/// Output of one planning run.
#[derive(Debug)]
pub struct BuildPlan {
    /// Strides in anchor-visitation order
    pub strides: Vec<Stride>,
    /// Robot relocations, one per anchor change
    pub movements: Vec<Movement>,
    /// Bricks no anchor could reach; they remain planned
    pub unassigned: usize,
}

impl BuildPlan {
    /// Bricks assigned across all strides.
    pub fn assigned(&self) -> usize {
        self.strides.iter().map(Stride::brick_count).sum()
    }
}

/// Column anchor X positions.
///
/// Tile from half a reach-width inward by whole reach-widths while inside
/// the wall; if the last tiled anchor cannot reach the right edge, force a
/// final anchor flush against it.
fn column_anchors(wall_width: f64, reach_width: f64) -> Vec<f64> {
    let mut anchors = Vec::new();
    let mut x = reach_width / 2.0;
    while x <= wall_width {
        anchors.push(x);
        x += reach_width;
    }

    let rightmost = wall_width - reach_width / 2.0;
    if anchors.last().is_none_or(|&last| last < rightmost) {
        anchors.push(rightmost);
    }
    anchors
}

/// Row anchor Y positions.
///
/// Step up by whole reach-heights from the ground; the row whose reach
/// covers the remaining height is appended and the scan stops there.
fn row_anchors(wall_height: f64, reach_height: f64) -> Vec<f64> {
    let mut anchors = Vec::new();
    let mut y = 0.0;
    while y < wall_height {
        anchors.push(y);
        if y + reach_height >= wall_height {
            break;
        }
        y += reach_height;
    }
    anchors
}

/// Partition the wall's planned bricks into strides and record the robot's
/// movement trace.
pub fn plan_build(
    wall: &mut Wall,
    robot: &mut Robot,
    manager: &mut StrideManager,
    catalog: &BrickCatalog,
) -> BuildPlan {
    let columns = column_anchors(wall.width(), robot.reach_width());
    let rows = row_anchors(wall.height(), robot.reach_height());

    let mut strides: Vec<Stride> = Vec::new();
    let mut movements: Vec<Movement> = Vec::new();
    let mut unbuilt: Vec<usize> = (0..wall.total_bricks()).collect();

    for (row_index, &anchor_y) in rows.iter().enumerate() {
        let mut scan = columns.clone();
        if row_index % 2 == 1 {
            scan.reverse();
        }

        for &anchor_x in &scan {
            let anchor = Position::new(anchor_x, anchor_y);
            if anchor != robot.position() {
                movements.push(Movement {
                    from: robot.position(),
                    to: anchor,
                });
                robot.move_to(anchor);
            }

            let reachable: Vec<usize> = unbuilt
                .iter()
                .copied()
                .filter(|&index| robot.can_reach(&wall.bricks()[index], catalog))
                .collect();
            if reachable.is_empty() {
                continue;
            }

            let mut stride = manager.create_stride(anchor);
            for index in reachable {
                stride.bricks.push(wall.bricks()[index].id);
                wall.brick_mut(index).assign_stride(stride.id);
            }
            unbuilt.retain(|index| !stride.bricks.contains(&wall.bricks()[*index].id));
            strides.push(stride);
        }
    }

    let plan = BuildPlan {
        strides,
        movements,
        unassigned: unbuilt.len(),
    };

    info!(
        "Planned {}/{} bricks in {} strides with {} movements",
        plan.assigned(),
        wall.total_bricks(),
        plan.strides.len(),
        plan.movements.len()
    );
    if plan.unassigned > 0 {
        warn!(
            "{} bricks are outside every anchor's reach and remain planned",
            plan.unassigned
        );
    }

    plan
}
