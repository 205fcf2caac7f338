//! Foundation types: positions, bricks, and the brick catalog.

mod types;

pub use types::{
    Brick, BrickCatalog, BrickDims, BrickKind, BrickState, JointDims, Movement, Position,
};
