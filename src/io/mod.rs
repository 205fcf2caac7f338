//! Output rendering: SVG snapshots and terminal views.
//!
//! Renderers consume the populated wall and the build plan; they never
//! feed back into planning.

mod ascii;
mod svg;

pub use ascii::render_ascii;
pub use svg::{SvgConfig, SvgRenderer};
