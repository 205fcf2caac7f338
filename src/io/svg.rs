//! SVG visualization of a planned wall.
//!
//! Renders the wall outline, every brick colored by its stride, the stride
//! anchor positions, and the robot's movement polyline. The SVG serves as
//! an audit file for checking a plan by eye.

use crate::core::{BrickCatalog, Movement};
use crate::planner::Stride;
use crate::wall::Wall;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per millimeter
    pub scale: f64,
    /// Padding around the wall in pixels
    pub padding: f64,
    /// Wall background color
    pub background: &'static str,
    /// Brick outline color
    pub outline: &'static str,
    /// Fill for bricks no stride covers
    pub unassigned_fill: &'static str,
    /// Movement polyline color
    pub movement_stroke: &'static str,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 0.25,
            padding: 20.0,
            background: "#F5F0E8",
            outline: "#333333",
            unassigned_fill: "#BBBBBB",
            movement_stroke: "#AA2222",
        }
    }
}

/// SVG snapshot builder
pub struct SvgRenderer<'a> {
    config: SvgConfig,
    wall: &'a Wall,
    catalog: &'a BrickCatalog,
    strides: &'a [Stride],
    movements: &'a [Movement],
    title: Option<String>,
}

impl<'a> SvgRenderer<'a> {
    /// Create a renderer for a wall with no plan overlay.
    pub fn new(wall: &'a Wall, catalog: &'a BrickCatalog) -> Self {
        Self {
            config: SvgConfig::default(),
            wall,
            catalog,
            strides: &[],
            movements: &[],
            title: None,
        }
    }

    /// Use a custom rendering configuration.
    pub fn with_config(mut self, config: SvgConfig) -> Self {
        self.config = config;
        self
    }

    /// Overlay a build plan: stride colors, anchors, and movements.
    pub fn with_plan(mut self, strides: &'a [Stride], movements: &'a [Movement]) -> Self {
        self.strides = strides;
        self.movements = movements;
        self
    }

    /// Add a title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn px_x(&self, x: f64) -> f64 {
        self.config.padding + x * self.config.scale
    }

    /// Y flip: wall Y runs up, SVG Y runs down.
    fn px_y(&self, y: f64) -> f64 {
        self.config.padding + (self.wall.height() - y) * self.config.scale
    }

    /// Assemble the SVG document.
    pub fn render(&self) -> String {
        let width = self.wall.width() * self.config.scale + 2.0 * self.config.padding;
        let height = self.wall.height() * self.config.scale + 2.0 * self.config.padding;

        let stride_colors: HashMap<usize, (u8, u8, u8)> = self
            .strides
            .iter()
            .map(|stride| (stride.id, stride.color))
            .collect();

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.config.background
        );

        // Wall outline
        let _ = writeln!(
            svg,
            r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
            self.px_x(0.0),
            self.px_y(self.wall.height()),
            self.wall.width() * self.config.scale,
            self.wall.height() * self.config.scale,
            self.config.outline
        );

        // Bricks, colored by stride
        for brick in self.wall.bricks() {
            let fill = match brick.stride.and_then(|id| stride_colors.get(&id)) {
                Some(&(r, g, b)) => format!("rgb({},{},{})", r, g, b),
                None => self.config.unassigned_fill.to_string(),
            };
            let _ = writeln!(
                svg,
                r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="0.5"/>"#,
                self.px_x(brick.position.x),
                self.px_y(brick.top(self.catalog)),
                brick.length(self.catalog) * self.config.scale,
                brick.height(self.catalog) * self.config.scale,
                fill,
                self.config.outline
            );
        }

        // Movement polyline
        if !self.movements.is_empty() {
            let mut points = format!(
                "{:.1},{:.1}",
                self.px_x(self.movements[0].from.x),
                self.px_y(self.movements[0].from.y)
            );
            for movement in self.movements {
                let _ = write!(
                    points,
                    " {:.1},{:.1}",
                    self.px_x(movement.to.x),
                    self.px_y(movement.to.y)
                );
            }
            let _ = writeln!(
                svg,
                r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="1.5" stroke-dasharray="6 3"/>"#,
                points, self.config.movement_stroke
            );
        }

        // Stride anchors
        for stride in self.strides {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="4" fill="rgb({},{},{})" stroke="{}"/>"#,
                self.px_x(stride.anchor.x),
                self.px_y(stride.anchor.y),
                stride.color.0,
                stride.color.1,
                stride.color.2,
                self.config.outline
            );
        }

        if let Some(title) = &self.title {
            let _ = writeln!(
                svg,
                r#"  <text x="{:.1}" y="{:.1}" font-family="monospace" font-size="12">{}</text>"#,
                self.config.padding,
                self.config.padding - 6.0,
                title
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render and write to a file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Brick, BrickDims, BrickKind, JointDims, Position};
    use crate::planner::StrideManager;

    fn catalog() -> BrickCatalog {
        BrickCatalog {
            full: BrickDims {
                length: 210.0,
                width: 100.0,
                height: 50.0,
            },
            half: BrickDims {
                length: 100.0,
                width: 100.0,
                height: 50.0,
            },
            quarter: BrickDims {
                length: 45.0,
                width: 100.0,
                height: 50.0,
            },
        }
    }

    #[test]
    fn test_render_contains_bricks_and_anchors() {
        let cat = catalog();
        let jnt = JointDims {
            head: 10.0,
            bed: 12.5,
        };
        let mut wall = Wall::new(2300.0, 2000.0, &cat, &jnt);
        let mut brick = Brick::new(0, BrickKind::Full, Position::new(0.0, 0.0));
        brick.assign_stride(0);
        wall.add(brick);

        let mut manager = StrideManager::new();
        let mut stride = manager.create_stride(Position::new(400.0, 0.0));
        stride.bricks.push(0);
        let strides = vec![stride];

        let svg = SvgRenderer::new(&wall, &cat)
            .with_plan(&strides, &[])
            .with_title("test wall")
            .render();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("test wall"));
        // One background, one outline, one brick.
        assert_eq!(svg.matches("<rect").count(), 3);
    }
}
