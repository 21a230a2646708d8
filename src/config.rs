//! Loader for L-System description files.
//!
//! The format is a flat list of `key=value` lines:
//!
//! ```text
//! # Koch curve
//! axiome = "a"
//! regles =
//!     "a=a-a++a-a"
//! taille = 5
//! angle = 60
//! niveau = 3
//! ```
//!
//! - `#` lines and blank lines are skipped. All whitespace inside a line is dropped.
//! - `regles=` opens a rule block: the following lines starting with `"` are rules,
//!   kept in order. Any other `key=value` line closes the block.
//! - `"` characters are stripped from values and rules.
//! - When a key appears twice the first assignment wins and a warning is logged.
//! - An `rgb` key turns colour cycling on whatever its value.

use crate::error::{LSystemError, Result};
use crate::interpreter::TurtleConfig;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

pub const KEY_AXIOM: &str = "axiome";
pub const KEY_RULES: &str = "regles";
pub const KEY_STEP: &str = "taille";
pub const KEY_ANGLE: &str = "angle";
pub const KEY_LEVELS: &str = "niveau";
pub const KEY_COLOR: &str = "rgb";

/// The raw content of a description file, before any typing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// Scalar `key=value` assignments.
    pub values: HashMap<String, String>,
    /// Rule strings in file order. `None` when no rule line was found.
    pub rules: Option<Vec<String>>,
}

impl RawConfig {
    /// Parses the text of a description file.
    pub fn parse(text: &str) -> Result<Self> {
        let mut raw = RawConfig::default();
        let mut reading_rules = false;

        for (idx, line) in text.lines().enumerate() {
            if line.starts_with('#') {
                continue;
            }
            let line: String = line.split_whitespace().collect();
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(LSystemError::Syntax {
                    line: idx + 1,
                    text: line.clone(),
                });
            };

            if key == KEY_RULES {
                reading_rules = true;
                if !value.is_empty() {
                    raw.push_rule(value);
                }
            } else if reading_rules && line.starts_with('"') {
                raw.push_rule(&line);
            } else {
                reading_rules = false;
                if raw.values.contains_key(key) {
                    warn!(key, "parameter was specified twice, keeping first assignment");
                } else {
                    raw.values.insert(key.to_owned(), value.replace('"', ""));
                }
            }
        }

        Ok(raw)
    }

    fn push_rule(&mut self, text: &str) {
        self.rules
            .get_or_insert_with(Vec::new)
            .push(text.replace('"', ""));
    }

    fn required(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LSystemError::ConfigurationMissing(key.to_owned()))
    }

    fn required_number<T: std::str::FromStr>(&self, key: &str) -> Result<T> {
        let value = self.required(key)?;
        value.parse().map_err(|_| LSystemError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// A fully validated L-System description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LSystemConfig {
    pub axiom: String,
    /// Rule strings as written, parsed when the axiom is expanded.
    pub rules: Vec<String>,
    pub step_length: i32,
    pub angle: i32,
    pub levels: u32,
    pub color_cycling: bool,
}

impl LSystemConfig {
    /// Parses and validates the text of a description file.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_raw(RawConfig::parse(text)?)
    }

    /// Reads and parses a description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LSystemError::io(path, e))?;
        Self::parse(&text)
    }

    /// Checks that every required key is present and well-formed.
    pub fn from_raw(raw: RawConfig) -> Result<Self> {
        let axiom = raw.required(KEY_AXIOM)?.to_owned();
        let rules = raw
            .rules
            .clone()
            .ok_or_else(|| LSystemError::ConfigurationMissing(KEY_RULES.to_owned()))?;
        let step_length = raw.required_number(KEY_STEP)?;
        let angle = raw.required_number(KEY_ANGLE)?;
        let levels = raw.required_number(KEY_LEVELS)?;
        let color_cycling = raw.values.contains_key(KEY_COLOR);

        Ok(Self {
            axiom,
            rules,
            step_length,
            angle,
            levels,
            color_cycling,
        })
    }

    /// Interpreter settings described by this file.
    pub fn turtle_config(&self) -> TurtleConfig {
        TurtleConfig {
            step_length: self.step_length as f32,
            turn_angle: self.angle as f32,
            color_cycling: self.color_cycling,
        }
    }
}
