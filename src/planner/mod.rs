//! Build planning: robot reach model, stride bookkeeping, and the
//! grid-scan planner that orders construction.

mod grid_scan;
mod robot;
mod stride;

pub use grid_scan::{plan_build, BuildPlan};
pub use robot::Robot;
pub use stride::{Stride, StrideManager};
