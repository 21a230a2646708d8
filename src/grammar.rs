//! Rewriting rules and axiom expansion.
//!
//! Rules are applied **sequentially** within a level: the first rule rewrites the
//! whole sequence, the second rule rewrites the result of the first, and so on.
//! This differs from textbook L-Systems, where every production of a level reads
//! the same input, so rule order matters here:
//!
//! ```
//! use lsystem_turtle::expand;
//!
//! // "a" -> "b" first, then "b" -> "c" sees the fresh "b".
//! assert_eq!(expand("a", &["a=b", "b=c"], 1).unwrap(), "c");
//! // Swapped, "b=c" runs before any "b" exists.
//! assert_eq!(expand("a", &["b=c", "a=b"], 1).unwrap(), "b");
//! ```

use crate::error::{LSystemError, Result};
use tracing::{debug, info};

/// A single `trigger=replacement` production.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Text to look for. Never empty.
    pub trigger: String,
    /// Text substituted for every occurrence of `trigger`. Never empty.
    pub replacement: String,
}

impl Rule {
    /// Builds a rule, rejecting an empty trigger or replacement.
    pub fn new(trigger: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let trigger = trigger.into();
        let replacement = replacement.into();
        if trigger.is_empty() || replacement.is_empty() {
            return Err(LSystemError::InvalidRule(format!("{trigger}={replacement}")));
        }
        Ok(Self {
            trigger,
            replacement,
        })
    }

    /// Parses `trigger=replacement`, splitting on the first `=`.
    ///
    /// Anything after the first `=` belongs to the replacement, so `a=b=c`
    /// rewrites `a` into `b=c`.
    pub fn parse(text: &str) -> Result<Self> {
        let (trigger, replacement) = text
            .split_once('=')
            .ok_or_else(|| LSystemError::InvalidRule(text.to_owned()))?;
        Self::new(trigger, replacement)
    }

    /// Replaces every non-overlapping occurrence of the trigger, scanning left to right.
    pub fn apply(&self, sequence: &str) -> String {
        sequence.replace(&self.trigger, &self.replacement)
    }
}

/// Runs one level: every rule in order, each over the previous rule's output.
pub fn expand_level(sequence: &str, rules: &[Rule]) -> String {
    rules
        .iter()
        .fold(sequence.to_owned(), |current, rule| rule.apply(&current))
}

/// Expands already-validated rules `levels` times.
pub fn expand_rules(axiom: &str, rules: &[Rule], levels: u32) -> String {
    let mut sequence = axiom.to_owned();
    for level in 1..=levels {
        sequence = expand_level(&sequence, rules);
        debug!(level, len = sequence.len(), "expanded level");
    }
    sequence
}

/// Expands `axiom` by applying the textual `rules` `levels` times.
///
/// With `levels == 0` the axiom is returned untouched and the rules are never
/// read. Otherwise every rule is parsed first and the first malformed one aborts
/// with [`LSystemError::InvalidRule`]. No bound is placed on the result length.
pub fn expand<S: AsRef<str>>(axiom: &str, rules: &[S], levels: u32) -> Result<String> {
    if levels == 0 {
        return Ok(axiom.to_owned());
    }

    let rules = rules
        .iter()
        .map(|r| Rule::parse(r.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    info!(rules = rules.len(), levels, "expanding axiom");
    Ok(expand_rules(axiom, &rules, levels))
}
