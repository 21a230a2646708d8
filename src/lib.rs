//! # lsystem-turtle
//!
//! Expands Lindenmayer-System grammars and draws them with a turtle.
//!
//! The pipeline is one-way: an axiom and its rules go through [`expand`], the
//! expanded sequence goes through a [`TurtleInterpreter`] which drives any
//! [`DrawingSurface`], and the instructions it performed come back as a trace that
//! [`ReplayScript`] turns into a standalone Python `turtle` program.
//!
//! ```
//! use lsystem_turtle::{expand, RecordingSurface, TurtleConfig, TurtleInterpreter};
//!
//! let sequence = expand("a", &["a=a+a"], 1).unwrap();
//! let interpreter = TurtleInterpreter::new(TurtleConfig::default());
//! let mut surface = RecordingSurface::new();
//! let run = interpreter.interpret(&sequence, &mut surface).unwrap();
//! assert_eq!(run.trace, "pd();fd(10)\nright(90)\npd();fd(10)\n");
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod script;
pub mod surface;
pub mod turtle;

pub use canvas::*;
pub use color::*;
pub use config::{LSystemConfig, RawConfig};
pub use error::LSystemError;
pub use grammar::*;
pub use interpreter::*;
pub use script::*;
pub use surface::*;
pub use turtle::*;
