//! Headless canvas recording the strokes left by the turtle.

use crate::surface::DrawingSurface;
use crate::turtle::{TurtleState, normalize_degrees};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pen colour used until the first `set_pen_color` call.
pub const DEFAULT_PEN_COLOR: [u8; 3] = [255, 255, 255];

/// A straight line left by the pen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    pub color: [u8; 3],
}

/// A headless drawing surface.
///
/// Keeps the cursor like an on-screen turtle would and records every pen-down
/// move as a [`Stroke`]. The result can be serialised and handed to any renderer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Canvas {
    /// All strokes in drawing order.
    pub strokes: Vec<Stroke>,

    cursor: TurtleState,
    pen_color: [u8; 3],
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            cursor: TurtleState::default(),
            pen_color: DEFAULT_PEN_COLOR,
        }
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> TurtleState {
        self.cursor
    }

    pub fn pen_color(&self) -> [u8; 3] {
        self.pen_color
    }

    /// Axis-aligned `(min, max)` corners enclosing every stroke, or `None` if nothing was drawn.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = self.strokes.first()?;
        let init = (first.from.min(first.to), first.from.max(first.to));
        Some(self.strokes.iter().fold(init, |(lo, hi), s| {
            (lo.min(s.from).min(s.to), hi.max(s.from).max(s.to))
        }))
    }
}

impl DrawingSurface for Canvas {
    fn pen_down(&mut self) {
        self.cursor.pen_down = true;
    }

    fn pen_up(&mut self) {
        self.cursor.pen_down = false;
    }

    fn move_forward(&mut self, distance: f32) {
        let from = self.cursor.position;
        self.cursor.advance(distance);
        if self.cursor.pen_down {
            self.strokes.push(Stroke {
                from,
                to: self.cursor.position,
                color: self.pen_color,
            });
        }
    }

    fn turn_right(&mut self, degrees: f32) {
        self.cursor.turn_right(degrees);
    }

    fn turn_left(&mut self, degrees: f32) {
        self.cursor.turn_left(degrees);
    }

    fn position(&self) -> Vec2 {
        self.cursor.position
    }

    fn heading(&self) -> f32 {
        self.cursor.heading
    }

    // Jumps never draw, whatever the pen state.
    fn goto(&mut self, position: Vec2) {
        self.cursor.position = position;
    }

    fn set_heading(&mut self, degrees: f32) {
        self.cursor.heading = normalize_degrees(degrees);
    }

    fn set_pen_color(&mut self, rgb: [u8; 3]) {
        self.pen_color = rgb;
    }
}
