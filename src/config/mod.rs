//! Configuration loading for istaka.
//!
//! Walls are described by a TOML file with `[wall]`, `[bricks.*]`,
//! `[joints]` and `[robot]` sections. Every field has a default matching
//! the standard waalformaat brick and a 2.3 m x 2.0 m test wall, so an
//! empty file (or no file) is a valid configuration.

use crate::core::{BrickCatalog, BrickDims, JointDims};
use crate::error::{IstakaError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct IstakaConfig {
    /// Optional human-readable name for the wall
    #[serde(default)]
    pub name: Option<String>,

    /// Wall dimensions
    #[serde(default)]
    pub wall: WallConfig,

    /// Brick formats
    #[serde(default)]
    pub bricks: BricksConfig,

    /// Joint gaps
    #[serde(default)]
    pub joints: JointsConfig,

    /// Robot reach
    #[serde(default)]
    pub robot: RobotConfig,
}

/// Wall dimensions
#[derive(Clone, Debug, Deserialize)]
pub struct WallConfig {
    /// Wall width in mm (default: 2300)
    #[serde(default = "default_wall_width")]
    pub width: f64,

    /// Wall height in mm (default: 2000)
    #[serde(default = "default_wall_height")]
    pub height: f64,
}

/// Brick format dimensions
#[derive(Clone, Debug, Deserialize)]
pub struct BrickConfig {
    /// Extent along the wall in mm
    pub length: f64,

    /// Wall depth in mm
    pub width: f64,

    /// Vertical extent in mm
    pub height: f64,
}

/// The three brick formats a wall is laid from
#[derive(Clone, Debug, Deserialize)]
pub struct BricksConfig {
    /// Full brick (default: 210 x 100 x 50)
    #[serde(default = "default_full_brick")]
    pub full: BrickConfig,

    /// Half brick (default: 100 x 100 x 50)
    #[serde(default = "default_half_brick")]
    pub half: BrickConfig,

    /// Quarter brick (default: 45 x 100 x 50)
    #[serde(default = "default_quarter_brick")]
    pub quarter: BrickConfig,
}

/// Joint gaps
#[derive(Clone, Debug, Deserialize)]
pub struct JointsConfig {
    /// Horizontal gap between adjacent bricks in mm (default: 10)
    #[serde(default = "default_head_joint")]
    pub head_joint: f64,

    /// Vertical gap between courses in mm (default: 12.5)
    #[serde(default = "default_bed_joint")]
    pub bed_joint: f64,
}

/// Robot reach capabilities
#[derive(Clone, Debug, Deserialize)]
pub struct RobotConfig {
    /// Horizontal reach in mm (default: 800)
    #[serde(default = "default_reach_width")]
    pub reach_width: f64,

    /// Vertical reach in mm (default: 1300)
    #[serde(default = "default_reach_height")]
    pub reach_height: f64,
}

// Default value functions
fn default_wall_width() -> f64 {
    2300.0
}
fn default_wall_height() -> f64 {
    2000.0
}
fn default_full_brick() -> BrickConfig {
    BrickConfig {
        length: 210.0,
        width: 100.0,
        height: 50.0,
    }
}
fn default_half_brick() -> BrickConfig {
    BrickConfig {
        length: 100.0,
        width: 100.0,
        height: 50.0,
    }
}
fn default_quarter_brick() -> BrickConfig {
    BrickConfig {
        length: 45.0,
        width: 100.0,
        height: 50.0,
    }
}
fn default_head_joint() -> f64 {
    10.0
}
fn default_bed_joint() -> f64 {
    12.5
}
fn default_reach_width() -> f64 {
    800.0
}
fn default_reach_height() -> f64 {
    1300.0
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            width: default_wall_width(),
            height: default_wall_height(),
        }
    }
}

impl Default for BricksConfig {
    fn default() -> Self {
        Self {
            full: default_full_brick(),
            half: default_half_brick(),
            quarter: default_quarter_brick(),
        }
    }
}

impl Default for JointsConfig {
    fn default() -> Self {
        Self {
            head_joint: default_head_joint(),
            bed_joint: default_bed_joint(),
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            reach_width: default_reach_width(),
            reach_height: default_reach_height(),
        }
    }
}

impl Default for IstakaConfig {
    fn default() -> Self {
        Self {
            name: None,
            wall: WallConfig::default(),
            bricks: BricksConfig::default(),
            joints: JointsConfig::default(),
            robot: RobotConfig::default(),
        }
    }
}

impl IstakaConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IstakaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: IstakaConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every dimension is strictly positive.
    ///
    /// Errors here are configuration errors; nothing downstream re-checks.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("wall.width", self.wall.width),
            ("wall.height", self.wall.height),
            ("bricks.full.length", self.bricks.full.length),
            ("bricks.full.height", self.bricks.full.height),
            ("bricks.half.length", self.bricks.half.length),
            ("bricks.half.height", self.bricks.half.height),
            ("bricks.quarter.length", self.bricks.quarter.length),
            ("bricks.quarter.height", self.bricks.quarter.height),
            ("joints.head_joint", self.joints.head_joint),
            ("joints.bed_joint", self.joints.bed_joint),
            ("robot.reach_width", self.robot.reach_width),
            ("robot.reach_height", self.robot.reach_height),
        ];
        for (field, value) in checks {
            if !(value > 0.0) {
                return Err(IstakaError::Config(format!(
                    "{} must be positive, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }

    /// Build the immutable brick catalog from the configured formats.
    pub fn catalog(&self) -> BrickCatalog {
        BrickCatalog {
            full: dims(&self.bricks.full),
            half: dims(&self.bricks.half),
            quarter: dims(&self.bricks.quarter),
        }
    }

    /// Joint gaps as the core type.
    pub fn joint_dims(&self) -> JointDims {
        JointDims {
            head: self.joints.head_joint,
            bed: self.joints.bed_joint,
        }
    }
}

fn dims(brick: &BrickConfig) -> BrickDims {
    BrickDims {
        length: brick.length,
        width: brick.width,
        height: brick.height,
    }
}
