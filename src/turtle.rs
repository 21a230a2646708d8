//! Turtle state, drawing symbols and the instructions they emit.

use crate::error::LSystemError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rounds to two decimals, folding `-0.0` into `0.0` so it never prints as `-0.00`.
fn to_hundredths(value: f32) -> f32 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// The state of the drawing turtle.
///
/// Coordinates follow the canvas convention: `x` grows to the right and `y`
/// grows downwards. The heading is in degrees, `0` points along `+x`, and turning
/// right increases it (clockwise on screen).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the cursor.
    pub position: Vec2,

    /// Current heading in degrees, kept within `[0, 360)`.
    pub heading: f32,

    /// Whether forward moves leave a trace.
    pub pen_down: bool,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            pen_down: true,
        }
    }
}

impl TurtleState {
    /// Unit vector pointing along the current heading.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }

    /// Moves `distance` along the heading.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    /// Turns clockwise by `degrees`.
    pub fn turn_right(&mut self, degrees: f32) {
        self.heading = normalize_degrees(self.heading + degrees);
    }

    /// Turns counter-clockwise by `degrees`.
    pub fn turn_left(&mut self, degrees: f32) {
        self.heading = normalize_degrees(self.heading - degrees);
    }

    /// Snapshot for the save-stack.
    pub fn save(&self) -> SavedPoint {
        SavedPoint {
            position: self.position,
            heading: self.heading,
        }
    }

    /// Teleports to a saved point, lifting the pen on the way.
    pub fn restore(&mut self, point: SavedPoint) {
        self.position = point.position;
        self.heading = point.heading;
        self.pen_down = false;
    }
}

/// A position and heading pushed by `[` and restored by `]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedPoint {
    pub position: Vec2,
    pub heading: f32,
}

/// The drawing alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Pen down, move forward (`a`).
    Draw,
    /// Pen up, move forward (`b`).
    Move,
    /// Turn right by the configured angle (`+`).
    TurnRight,
    /// Turn left by the configured angle (`-`).
    TurnLeft,
    /// Turn 180 degrees (`*`).
    Reverse,
    /// Save position and heading (`[`).
    Push,
    /// Restore the most recently saved position and heading (`]`).
    Pop,
}

impl Symbol {
    /// Every symbol paired with its character.
    pub const ALL: [(char, Symbol); 7] = [
        ('a', Symbol::Draw),
        ('b', Symbol::Move),
        ('+', Symbol::TurnRight),
        ('-', Symbol::TurnLeft),
        ('*', Symbol::Reverse),
        ('[', Symbol::Push),
        (']', Symbol::Pop),
    ];
}

impl TryFrom<char> for Symbol {
    type Error = LSystemError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::ALL
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, sym)| *sym)
            .ok_or(LSystemError::UnrecognizedSymbol(c))
    }
}

/// A drawing command performed by the interpreter.
///
/// Its [`Display`](fmt::Display) form is one statement line of a Python `turtle`
/// script, which is what the replay trace is made of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instruction {
    DrawForward(f32),
    MoveForward(f32),
    TurnRight(f32),
    TurnLeft(f32),
    /// Teleport to a saved point with the pen lifted.
    Jump(SavedPoint),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::DrawForward(len) => writeln!(f, "pd();fd({len})"),
            Instruction::MoveForward(len) => writeln!(f, "pu();fd({len})"),
            Instruction::TurnRight(angle) => writeln!(f, "right({angle})"),
            Instruction::TurnLeft(angle) => writeln!(f, "left({angle})"),
            Instruction::Jump(point) => {
                // Python's turtle is y-up and counter-clockwise.
                let x = to_hundredths(point.position.x);
                let y = to_hundredths(-point.position.y);
                let heading = normalize_degrees(360.0 - point.heading);
                writeln!(f, "pu();goto({x:.2},{y:.2});setheading({heading})")
            }
        }
    }
}
