//! Error type shared by the expander, the interpreter and the file loaders.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a run.
///
/// None of these are recovered internally: the first one raised ends the run.
#[derive(Debug, Error)]
pub enum LSystemError {
    /// A rule with an empty trigger or an empty replacement.
    #[error("invalid rule: {0:?}")]
    InvalidRule(String),

    /// A symbol with no dispatch entry was met while interpreting the expanded sequence.
    #[error("unrecognized symbol in axiom: {0:?}")]
    UnrecognizedSymbol(char),

    /// `]` with nothing left on the save-stack.
    #[error("tried to restore a position that was never saved, check the brackets of the axiom")]
    UnbalancedBracket,

    /// A required key is absent from the L-system file.
    #[error("missing required parameter '{0}'")]
    ConfigurationMissing(String),

    /// A line of the L-system file has no `key=value` shape.
    #[error("line {line} does not follow the key=value syntax: {text:?}")]
    Syntax { line: usize, text: String },

    /// A numeric parameter could not be parsed.
    #[error("invalid value for '{key}': {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LSystemError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LSystemError>;
