//! Core value types for wall layout and build planning.
//!
//! All coordinates are millimeters in the wall plane: X runs along the wall
//! from the left edge, Y runs upward from the ground. A brick's position is
//! its bottom-left corner; its horizontal extent is the catalog `length` and
//! its vertical extent the catalog `height` (`width` is wall depth and plays
//! no part in 2-D layout).

use serde::{Deserialize, Serialize};

/// A 2D point in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate in mm, from the left wall edge
    pub x: f64,
    /// Y coordinate in mm, from the ground
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// One robot relocation between two anchor positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Position the robot left
    pub from: Position,
    /// Position the robot arrived at
    pub to: Position,
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.0}, {:.0}) -> ({:.0}, {:.0})",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}

/// The closed set of brick formats a wall is laid from.
///
/// Dimensions for each format come from the [`BrickCatalog`]; the kind itself
/// only identifies which catalog entry applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickKind {
    /// Full stretcher brick
    Full,
    /// Half brick
    Half,
    /// Quarter (closer) brick
    Quarter,
}

impl BrickKind {
    /// Stable lowercase name, matching the configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrickKind::Full => "full",
            BrickKind::Half => "half",
            BrickKind::Quarter => "quarter",
        }
    }
}

impl std::fmt::Display for BrickKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build state of a single brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickState {
    /// Laid out by a bond generator, not yet built
    Planned,
    /// Placed by the robot
    Built,
}

/// Physical dimensions of one brick format, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickDims {
    /// Extent along the wall (X)
    pub length: f64,
    /// Wall depth (unused by 2-D layout)
    pub width: f64,
    /// Vertical extent (Y)
    pub height: f64,
}

/// Head and bed joint gaps, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointDims {
    /// Horizontal gap between adjacent bricks in a course
    pub head: f64,
    /// Vertical gap between courses
    pub bed: f64,
}

/// Immutable dimension lookup for every brick format.
///
/// Built once from configuration and passed by reference into every
/// component that needs dimension lookups, so generation runs carry no
/// shared mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickCatalog {
    /// Full brick dimensions
    pub full: BrickDims,
    /// Half brick dimensions
    pub half: BrickDims,
    /// Quarter brick dimensions
    pub quarter: BrickDims,
}

impl BrickCatalog {
    /// Dimensions of a brick format.
    #[inline]
    pub fn dims(&self, kind: BrickKind) -> &BrickDims {
        match kind {
            BrickKind::Full => &self.full,
            BrickKind::Half => &self.half,
            BrickKind::Quarter => &self.quarter,
        }
    }

    /// Shortest catalog length, the unit for column indexing.
    pub fn min_length(&self) -> f64 {
        self.full
            .length
            .min(self.half.length)
            .min(self.quarter.length)
    }
}

/// A single brick in the wall plan.
///
/// Position and kind are fixed once the brick is inserted into a
/// [`Wall`](crate::wall::Wall); only `state` and `stride` mutate afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Sequential id assigned by the generator that created it
    pub id: usize,
    /// Catalog format
    pub kind: BrickKind,
    /// Bottom-left corner
    pub position: Position,
    /// Build state, `Planned` until the robot places it
    pub state: BrickState,
    /// Id of the stride that will build this brick, set once by the planner
    pub stride: Option<usize>,
}

impl Brick {
    /// Create a planned brick.
    pub fn new(id: usize, kind: BrickKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            state: BrickState::Planned,
            stride: None,
        }
    }

    /// Horizontal extent.
    #[inline]
    pub fn length(&self, catalog: &BrickCatalog) -> f64 {
        catalog.dims(self.kind).length
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self, catalog: &BrickCatalog) -> f64 {
        catalog.dims(self.kind).height
    }

    /// Right edge X.
    #[inline]
    pub fn right(&self, catalog: &BrickCatalog) -> f64 {
        self.position.x + self.length(catalog)
    }

    /// Top edge Y.
    #[inline]
    pub fn top(&self, catalog: &BrickCatalog) -> f64 {
        self.position.y + self.height(catalog)
    }

    /// Geometric center of the brick face.
    #[inline]
    pub fn center(&self, catalog: &BrickCatalog) -> Position {
        Position::new(
            self.position.x + self.length(catalog) / 2.0,
            self.position.y + self.height(catalog) / 2.0,
        )
    }

    /// Whether a point lies on this brick face (edges inclusive).
    pub fn contains_point(&self, catalog: &BrickCatalog, x: f64, y: f64) -> bool {
        self.position.x <= x
            && x <= self.right(catalog)
            && self.position.y <= y
            && y <= self.top(catalog)
    }

    /// Flip the brick to `Built`. Forward-only; there is no transition back.
    pub fn mark_built(&mut self) {
        self.state = BrickState::Built;
    }

    /// Record the stride that will build this brick. First assignment wins.
    pub fn assign_stride(&mut self, stride_id: usize) {
        if self.stride.is_none() {
            self.stride = Some(stride_id);
        }
    }
}
