//! Replay scripts: a standalone Python `turtle` program redrawing a run.

use crate::error::{LSystemError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Sets up a fast, skippable preview window.
pub const PREAMBLE: &str = "from turtle import *;speed(0);onkey(lambda: tracer(0), 'space');\
screensize(2000, 2000);listen();title('Press SPACE to skip preview')\n";

/// Flushes the drawing and waits for a click.
pub const POSTAMBLE: &str = "tracer(1);title('Click anywhere to close');exitonclick()";

/// A trace wrapped with the fixed preamble and postamble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayScript<'a> {
    trace: &'a str,
}

impl<'a> ReplayScript<'a> {
    pub fn new(trace: &'a str) -> Self {
        Self { trace }
    }

    /// Streams the full script into `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(PREAMBLE.as_bytes())?;
        out.write_all(self.trace.as_bytes())?;
        out.write_all(POSTAMBLE.as_bytes())?;
        out.flush()
    }

    /// Creates or truncates `path` and writes the script to it.
    ///
    /// The file handle is dropped on every path out of this function.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LSystemError::io(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out)
            .map_err(|e| LSystemError::io(path, e))?;
        info!(path = %path.display(), "replay script written");
        Ok(())
    }
}

impl std::fmt::Display for ReplayScript<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{PREAMBLE}{}{POSTAMBLE}", self.trace)
    }
}
