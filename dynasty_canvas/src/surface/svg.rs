//! Renders the latest frame as an SVG document.

use super::{DrawSurface, Fill};
use crate::error::SurfaceError;
use crate::shapes::{PathCommand, ShapePath};

/// An in-memory SVG canvas. `clear` drops everything drawn so far, so
/// [`SvgSurface::to_svg`] always shows the most recent frame.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Create an empty surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Number of filled shapes in the current frame.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The current frame as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn render_path(path: &ShapePath) -> String {
        let mut outline = String::new();
        let mut shapes = String::new();

        for command in path.commands() {
            match *command {
                PathCommand::MoveTo { x, y } => outline.push_str(&format!("M{:.2} {:.2} ", x, y)),
                PathCommand::LineTo { x, y } => outline.push_str(&format!("L{:.2} {:.2} ", x, y)),
                PathCommand::Close => outline.push_str("Z "),
                PathCommand::Arc { cx, cy, radius } => shapes.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>",
                    cx, cy, radius
                )),
                PathCommand::Ellipse {
                    cx,
                    cy,
                    radius_x,
                    radius_y,
                    rotation,
                } => shapes.push_str(&format!(
                    "<ellipse cx=\"{cx:.2}\" cy=\"{cy:.2}\" rx=\"{radius_x:.2}\" ry=\"{radius_y:.2}\" transform=\"rotate({deg:.2} {cx:.2} {cy:.2})\"/>",
                    deg = rotation.to_degrees()
                )),
            }
        }

        if !outline.is_empty() {
            shapes.push_str(&format!("<path d=\"{}\"/>", outline.trim_end()));
        }
        shapes
    }
}

impl DrawSurface for SvgSurface {
    fn size(&self) -> Result<(u32, u32), SurfaceError> {
        Ok((self.width, self.height))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.width = width;
        self.height = height;
        self.elements.clear();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.elements.clear();
        Ok(())
    }

    fn fill_path(&mut self, path: &ShapePath, fill: &Fill<'_>) -> Result<(), SurfaceError> {
        self.elements.push(format!(
            "<g fill=\"{}\" fill-opacity=\"{:.3}\">{}</g>",
            escape_attribute(fill.color),
            fill.opacity,
            Self::render_path(path)
        ));
        Ok(())
    }
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
