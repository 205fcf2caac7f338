//! Bond pattern generators.
//!
//! Each generator is a pure function of the wall dimensions and the brick
//! catalog: it synthesizes an ordered brick list course by course, bottom to
//! top, with ids assigned sequentially from 0 in generation order. A course
//! is abandoned once its top edge would exceed the wall height.
//!
//! Generators never touch wall state. Callers insert the output through
//! [`Wall::try_add`](crate::wall::Wall::try_add) and treat any rejection as
//! a configuration error.

mod english_cross;
mod flemish;
mod stretcher;
mod wild;

use crate::core::{Brick, BrickCatalog, BrickKind, JointDims, Position};
use crate::error::{IstakaError, Result};
use crate::wall::Wall;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Available bond patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BondPattern {
    /// Running bond: full bricks with a half-brick offset every other course.
    Stretcher,

    /// Alternating full and half bricks in every course, with quarter
    /// closers on the offset courses.
    Flemish,

    /// Alternating all-full and all-half courses with quarter closers
    /// breaking the joint alignment.
    EnglishCross,

    /// Wildverband: seeded pseudo-random mix of full and half bricks under
    /// joint-alignment and stagger constraints.
    Wild,
}

/// Valid pattern names for error messages.
const VALID_PATTERNS: &str = "stretcher, flemish, english-cross, wild";

impl BondPattern {
    /// Stable kebab-case name, matching CLI and config keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            BondPattern::Stretcher => "stretcher",
            BondPattern::Flemish => "flemish",
            BondPattern::EnglishCross => "english-cross",
            BondPattern::Wild => "wild",
        }
    }

    /// Run the generator for this pattern.
    ///
    /// `seed` feeds the wild bond only; the other patterns are fully
    /// deterministic and ignore it.
    pub fn generate(
        &self,
        wall: &Wall,
        catalog: &BrickCatalog,
        joints: &JointDims,
        seed: u64,
    ) -> Vec<Brick> {
        match self {
            BondPattern::Stretcher => stretcher::generate(wall, catalog, joints),
            BondPattern::Flemish => flemish::generate(wall, catalog, joints),
            BondPattern::EnglishCross => english_cross::generate(wall, catalog, joints),
            BondPattern::Wild => wild::generate(wall, catalog, joints, seed),
        }
    }
}

impl std::str::FromStr for BondPattern {
    type Err = IstakaError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "stretcher" => Ok(BondPattern::Stretcher),
            "flemish" => Ok(BondPattern::Flemish),
            "english-cross" => Ok(BondPattern::EnglishCross),
            "wild" => Ok(BondPattern::Wild),
            _ => Err(IstakaError::UnknownPattern {
                name: name.to_string(),
                valid: VALID_PATTERNS,
            }),
        }
    }
}

impl std::fmt::Display for BondPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brick accumulator shared by the generators.
///
/// Keeps the sequential id assignment in one place so every generator emits
/// ids 0, 1, 2, ... in placement order.
struct CourseLayout {
    bricks: Vec<Brick>,
}

impl CourseLayout {
    fn new() -> Self {
        Self { bricks: Vec::new() }
    }

    /// Place one brick at (x, y).
    fn place(&mut self, kind: BrickKind, x: f64, y: f64) {
        let id = self.bricks.len();
        self.bricks.push(Brick::new(id, kind, Position::new(x, y)));
    }

    fn into_bricks(self) -> Vec<Brick> {
        self.bricks
    }
}
