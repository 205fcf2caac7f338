//! Stride bookkeeping.
//!
//! A stride is the set of bricks the robot builds without moving, anchored
//! at one scan-grid position. The manager hands out sequential ids and a
//! display color from a fixed wrapping palette; the color carries no
//! planning semantics.

use crate::core::Position;
use serde::Serialize;

/// Cosmetic palette cycled across strides, for renderers.
const PALETTE: [(u8, u8, u8); 16] = [
    (100, 149, 237), // cornflower blue
    (220, 20, 60),   // crimson
    (255, 165, 0),   // orange
    (50, 205, 50),   // lime green
    (138, 43, 226),  // blue violet
    (255, 20, 147),  // deep pink
    (0, 191, 255),   // deep sky blue
    (255, 215, 0),   // gold
    (128, 0, 128),   // purple
    (255, 69, 0),    // red orange
    (46, 139, 87),   // sea green
    (255, 105, 180), // hot pink
    (30, 144, 255),  // dodger blue
    (255, 140, 0),   // dark orange
    (147, 112, 219), // medium purple
    (220, 220, 220), // light gray
];

/// A group of bricks buildable from one robot anchor.
#[derive(Debug, Clone, Serialize)]
pub struct Stride {
    /// Sequential id, starting at 0
    pub id: usize,
    /// Robot anchor position this stride is built from
    pub anchor: Position,
    /// Ids of the bricks assigned to this stride, in assignment order
    pub bricks: Vec<usize>,
    /// Display color (cosmetic only)
    pub color: (u8, u8, u8),
}

impl Stride {
    /// Number of bricks assigned.
    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }
}

/// Allocates strides with sequential ids and palette colors.
#[derive(Debug, Default)]
pub struct StrideManager {
    created: usize,
    color_index: usize,
}

impl StrideManager {
    /// Create a fresh manager; the first stride gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next stride at an anchor position.
    pub fn create_stride(&mut self, anchor: Position) -> Stride {
        let stride = Stride {
            id: self.created,
            anchor,
            bricks: Vec::new(),
            color: self.next_color(),
        };
        self.created += 1;
        stride
    }

    /// Strides allocated so far.
    pub fn count(&self) -> usize {
        self.created
    }

    fn next_color(&mut self) -> (u8, u8, u8) {
        let color = PALETTE[self.color_index % PALETTE.len()];
        self.color_index += 1;
        color
    }
}
