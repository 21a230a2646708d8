//! The drawing capability the interpreter drives.
//!
//! The interpreter never owns a renderer. It calls through a [`DrawingSurface`],
//! so a run can target an interactive canvas, the headless
//! [`Canvas`](crate::canvas::Canvas), or a [`RecordingSurface`] in tests.

use crate::turtle::TurtleState;
use glam::Vec2;

/// Turtle-style drawing operations, in canvas coordinates (see [`TurtleState`]).
pub trait DrawingSurface {
    fn pen_down(&mut self);
    fn pen_up(&mut self);
    fn move_forward(&mut self, distance: f32);
    fn turn_right(&mut self, degrees: f32);
    fn turn_left(&mut self, degrees: f32);
    fn position(&self) -> Vec2;
    fn heading(&self) -> f32;
    fn goto(&mut self, position: Vec2);
    fn set_heading(&mut self, degrees: f32);
    fn set_pen_color(&mut self, rgb: [u8; 3]);
}

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCall {
    PenDown,
    PenUp,
    MoveForward(f32),
    TurnRight(f32),
    TurnLeft(f32),
    Goto(Vec2),
    SetHeading(f32),
    SetPenColor([u8; 3]),
}

/// A surface that draws nothing and logs every call it receives.
///
/// It still tracks the cursor so that [`position`](DrawingSurface::position) and
/// [`heading`](DrawingSurface::heading) answer like a real canvas would.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    cursor: TurtleState,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> TurtleState {
        self.cursor
    }

    /// Number of forward moves made with the pen down.
    pub fn drawn_segments(&self) -> usize {
        let mut pen_down = true;
        let mut count = 0;
        for call in &self.calls {
            match call {
                SurfaceCall::PenDown => pen_down = true,
                SurfaceCall::PenUp => pen_down = false,
                SurfaceCall::MoveForward(_) if pen_down => count += 1,
                _ => {}
            }
        }
        count
    }
}

impl DrawingSurface for RecordingSurface {
    fn pen_down(&mut self) {
        self.cursor.pen_down = true;
        self.calls.push(SurfaceCall::PenDown);
    }

    fn pen_up(&mut self) {
        self.cursor.pen_down = false;
        self.calls.push(SurfaceCall::PenUp);
    }

    fn move_forward(&mut self, distance: f32) {
        self.cursor.advance(distance);
        self.calls.push(SurfaceCall::MoveForward(distance));
    }

    fn turn_right(&mut self, degrees: f32) {
        self.cursor.turn_right(degrees);
        self.calls.push(SurfaceCall::TurnRight(degrees));
    }

    fn turn_left(&mut self, degrees: f32) {
        self.cursor.turn_left(degrees);
        self.calls.push(SurfaceCall::TurnLeft(degrees));
    }

    fn position(&self) -> Vec2 {
        self.cursor.position
    }

    fn heading(&self) -> f32 {
        self.cursor.heading
    }

    fn goto(&mut self, position: Vec2) {
        self.cursor.position = position;
        self.calls.push(SurfaceCall::Goto(position));
    }

    fn set_heading(&mut self, degrees: f32) {
        self.cursor.heading = crate::turtle::normalize_degrees(degrees);
        self.calls.push(SurfaceCall::SetHeading(degrees));
    }

    fn set_pen_color(&mut self, rgb: [u8; 3]) {
        self.calls.push(SurfaceCall::SetPenColor(rgb));
    }
}
