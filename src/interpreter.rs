//! Interpreter that walks an expanded L-System sequence and drives a [`DrawingSurface`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! then call [`TurtleInterpreter::interpret`] with the expanded sequence and a surface.
//! Each symbol is dispatched through [`TurtleInterpreter::step`], which is pure apart
//! from the explicit save-stack it is handed, and the resulting [`Instruction`] is
//! replayed on the surface and appended to the trace.

use crate::color::ColorCycle;
use crate::error::{LSystemError, Result};
use crate::surface::DrawingSurface;
use crate::turtle::{Instruction, SavedPoint, Symbol, TurtleState};
use tracing::{info, trace};

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Distance covered by `a` and `b`.
    pub step_length: f32,
    /// Angle in degrees turned by `+` and `-`.
    pub turn_angle: f32,
    /// Cycle the pen colour one step before every drawn segment.
    pub color_cycling: bool,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step_length: 10.0,
            turn_angle: 90.0,
            color_cycling: false,
        }
    }
}

/// The outcome of a complete run.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpretation {
    /// Every emitted instruction, one statement per line, in visitation order.
    pub trace: String,
    /// Cursor state after the last symbol.
    pub state: TurtleState,
}

/// Interprets an expanded L-System sequence as turtle drawing commands.
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    /// Dispatches one symbol.
    ///
    /// Returns the next cursor state and the instruction performed, if any (`[`
    /// only touches the stack). `]` on an empty stack fails with
    /// [`LSystemError::UnbalancedBracket`].
    pub fn step(
        &self,
        mut state: TurtleState,
        stack: &mut Vec<SavedPoint>,
        symbol: Symbol,
    ) -> Result<(TurtleState, Option<Instruction>)> {
        let step = self.config.step_length;
        let angle = self.config.turn_angle;

        let instruction = match symbol {
            Symbol::Draw => {
                state.pen_down = true;
                state.advance(step);
                Some(Instruction::DrawForward(step))
            }
            Symbol::Move => {
                state.pen_down = false;
                state.advance(step);
                Some(Instruction::MoveForward(step))
            }
            Symbol::TurnRight => {
                state.turn_right(angle);
                Some(Instruction::TurnRight(angle))
            }
            Symbol::TurnLeft => {
                state.turn_left(angle);
                Some(Instruction::TurnLeft(angle))
            }
            Symbol::Reverse => {
                state.turn_right(180.0);
                Some(Instruction::TurnRight(180.0))
            }
            Symbol::Push => {
                stack.push(state.save());
                None
            }
            Symbol::Pop => {
                let point = stack.pop().ok_or(LSystemError::UnbalancedBracket)?;
                state.restore(point);
                Some(Instruction::Jump(point))
            }
        };

        Ok((state, instruction))
    }

    /// Performs `instruction` on the surface.
    pub fn render<S: DrawingSurface>(surface: &mut S, instruction: &Instruction) {
        match *instruction {
            Instruction::DrawForward(len) => {
                surface.pen_down();
                surface.move_forward(len);
            }
            Instruction::MoveForward(len) => {
                surface.pen_up();
                surface.move_forward(len);
            }
            Instruction::TurnRight(angle) => surface.turn_right(angle),
            Instruction::TurnLeft(angle) => surface.turn_left(angle),
            Instruction::Jump(point) => {
                surface.pen_up();
                surface.goto(point.position);
                surface.set_heading(point.heading);
            }
        }
    }

    /// Walks `sequence`, drawing on `surface` and appending each instruction to `trace`.
    ///
    /// The first unknown symbol or unbalanced `]` stops the walk. Whatever was
    /// drawn and traced before that point stays in place.
    pub fn interpret_into<S: DrawingSurface>(
        &self,
        sequence: &str,
        surface: &mut S,
        trace: &mut String,
    ) -> Result<TurtleState> {
        let mut state = TurtleState::default();
        let mut stack: Vec<SavedPoint> = Vec::new();
        let mut colors = self.config.color_cycling.then(ColorCycle::default);

        for c in sequence.chars() {
            let symbol = Symbol::try_from(c)?;

            if symbol == Symbol::Draw
                && let Some(cycle) = colors.as_mut()
            {
                surface.set_pen_color(cycle.advance());
            }

            let (next, instruction) = self.step(state, &mut stack, symbol)?;
            state = next;
            trace!(symbol = %c, depth = stack.len(), "dispatched");

            if let Some(instruction) = instruction {
                Self::render(surface, &instruction);
                trace.push_str(&instruction.to_string());
            }
        }

        Ok(state)
    }

    /// Interprets the full `sequence` and returns the trace with the final state.
    pub fn interpret<S: DrawingSurface>(
        &self,
        sequence: &str,
        surface: &mut S,
    ) -> Result<Interpretation> {
        info!(symbols = sequence.len(), "starting drawing");
        let mut trace = String::new();
        let state = self.interpret_into(sequence, surface, &mut trace)?;
        info!("finished drawing");
        Ok(Interpretation { trace, state })
    }
}
