//! The reference string a population evolves toward.

use super::individual::{MAX_CHAR, MIN_CHAR};
use std::fmt;

/// Immutable target string, stored as code points for error evaluation.
///
/// Length is measured in code points, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    code_points: Vec<u32>,
}

impl Target {
    /// Creates a target from any string.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let code_points = text.chars().map(u32::from).collect();
        Self { text, code_points }
    }

    /// The target as text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The target as a sequence of code points.
    pub fn code_points(&self) -> &[u32] {
        &self.code_points
    }

    /// Number of code points.
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    /// Returns `true` for the empty target.
    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// Upper bound on candidate length: twice the target length.
    pub fn max_length(&self) -> usize {
        2 * self.len()
    }

    /// Returns `true` if every character lies in the printable range a
    /// candidate can hold.
    ///
    /// A run toward an unreachable target never converges.
    pub fn is_reachable(&self) -> bool {
        self.code_points
            .iter()
            .all(|&cp| (u32::from(MIN_CHAR)..=u32::from(MAX_CHAR)).contains(&cp))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Target {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Target {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
