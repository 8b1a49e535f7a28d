//! Particle outlines as drawable paths.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use dynasty_rules::ShapeKind;

/// One drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    /// A full circle.
    Arc { cx: f64, cy: f64, radius: f64 },
    /// A full ellipse, rotated by `rotation` radians.
    Ellipse {
        cx: f64,
        cy: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
    },
    Close,
}

/// A filled path built from [`PathCommand`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePath {
    commands: Vec<PathCommand>,
}

impl ShapePath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Commands in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the path for a shape centered at `(x, y)`.
pub fn shape_path(kind: ShapeKind, x: f64, y: f64, size: f64) -> ShapePath {
    match kind {
        ShapeKind::Star => star_path(x, y, size),
        ShapeKind::Cloud => cloud_path(x, y, size),
        ShapeKind::Petal => petal_path(x, y, size),
    }
}

/// Five vertices at 72° steps from angle 0, alternating between radius `size` and
/// `size / 2`.
pub fn star_path(x: f64, y: f64, size: f64) -> ShapePath {
    let mut path = ShapePath::new();
    for i in 0u32..5 {
        let angle = f64::from(i) * 2.0 * PI / 5.0;
        let radius = if i % 2 == 0 { size } else { size / 2.0 };
        let px = x + angle.cos() * radius;
        let py = y + angle.sin() * radius;
        if i == 0 {
            path.push(PathCommand::MoveTo { x: px, y: py });
        } else {
            path.push(PathCommand::LineTo { x: px, y: py });
        }
    }
    path.push(PathCommand::Close);
    path
}

/// A center circle with two smaller circles on either side.
pub fn cloud_path(x: f64, y: f64, size: f64) -> ShapePath {
    let mut path = ShapePath::new();
    path.push(PathCommand::Arc {
        cx: x,
        cy: y,
        radius: size,
    });
    path.push(PathCommand::Arc {
        cx: x + size,
        cy: y,
        radius: size * 0.8,
    });
    path.push(PathCommand::Arc {
        cx: x - size,
        cy: y,
        radius: size * 0.8,
    });
    path
}

/// A tall ellipse tilted 45°.
pub fn petal_path(x: f64, y: f64, size: f64) -> ShapePath {
    let mut path = ShapePath::new();
    path.push(PathCommand::Ellipse {
        cx: x,
        cy: y,
        radius_x: size,
        radius_y: size * 2.0,
        rotation: PI / 4.0,
    });
    path
}
