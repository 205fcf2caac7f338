//! # Istaka
//!
//! Masonry bond layout and reach-limited robot build planning.
//!
//! Istaka computes brick-by-brick layouts for four masonry bond patterns
//! (stretcher, flemish, english cross, wild) on a rectangular wall, then
//! plans the order in which a reach-limited robot builds them: bricks
//! buildable from one robot position form a *stride*, and the robot's
//! relocations between strides are recorded as *movements*.
//!
//! ## Quick Start
//!
//! ```rust
//! use istaka::{BondPattern, IstakaConfig, Robot, StrideManager, Wall};
//!
//! let config = IstakaConfig::default();
//! let catalog = config.catalog();
//! let joints = config.joint_dims();
//!
//! // Lay out a stretcher bond and commit it to the wall.
//! let mut wall = Wall::new(config.wall.width, config.wall.height, &catalog, &joints);
//! for brick in BondPattern::Stretcher.generate(&wall, &catalog, &joints, 0) {
//!     wall.try_add(brick, &catalog)?;
//! }
//!
//! // Plan the build.
//! let mut robot = Robot::new(config.robot.reach_width, config.robot.reach_height);
//! let mut strides = StrideManager::new();
//! let plan = istaka::plan_build(&mut wall, &mut robot, &mut strides, &catalog);
//!
//! println!(
//!     "{} strides, {} movements, {} bricks unreachable",
//!     plan.strides.len(),
//!     plan.movements.len(),
//!     plan.unassigned
//! );
//! # Ok::<(), istaka::IstakaError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   io/                       │  ← SVG / terminal output
//! └─────────────────────────────────────────────┘
//!                       │
//! ┌─────────────────────────────────────────────┐
//! │                planner/                     │  ← Robot, strides, grid scan
//! └─────────────────────────────────────────────┘
//!                       │
//! ┌─────────────────────────────────────────────┐
//! │                 bonds/                      │  ← Pattern generators
//! └─────────────────────────────────────────────┘
//!                       │
//! ┌─────────────────────────────────────────────┐
//! │              wall/  config/                 │  ← Container + validation
//! └─────────────────────────────────────────────┘
//!                       │
//! ┌─────────────────────────────────────────────┐
//! │                  core/                      │  ← Foundation types
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Coordinate System
//!
//! All coordinates are millimeters in the wall plane: X runs rightward
//! along the wall from the left edge, Y runs upward from the ground. A
//! brick's position is its bottom-left corner.

#![warn(missing_docs)]

// Foundation types (no internal deps)
pub mod core;

// Error handling
pub mod error;

// Configuration (depends on core)
pub mod config;

// Wall container and spatial index (depends on core)
pub mod wall;

// Bond pattern generators (depends on core, wall)
pub mod bonds;

// Build planning (depends on core, wall)
pub mod planner;

// Output rendering (depends on everything above)
pub mod io;

pub use bonds::BondPattern;
pub use config::IstakaConfig;
pub use core::{
    Brick, BrickCatalog, BrickDims, BrickKind, BrickState, JointDims, Movement, Position,
};
pub use error::{IstakaError, Result};
pub use planner::{plan_build, BuildPlan, Robot, Stride, StrideManager};
pub use wall::Wall;
