//! A candidate string and its cached error.
//!
//! Content is stored as printable ASCII bytes; every operation keeps each
//! byte inside [`MIN_CHAR`]`..=`[`MAX_CHAR`].

use super::random::RandomSource;
use super::target::Target;
use crate::error::{EvoError, Result};
use std::borrow::Cow;
use std::fmt;

/// Lowest printable code point (space).
pub const MIN_CHAR: u8 = 32;

/// Highest printable code point (`~`).
pub const MAX_CHAR: u8 = 126;

/// Error contributed by each character of length mismatch.
pub const LENGTH_PENALTY: u64 = 128;

/// Probability that a mutation redraws the length.
pub const RESIZE_PROBABILITY: f64 = 0.2;

/// Probability that a mutation perturbs a given character.
pub const CHAR_CHANGE_PROBABILITY: f64 = 0.4;

/// Largest per-character shift applied by a mutation, in either direction.
pub const MAX_CHAR_STEP: i64 = 4;

/// Error carried by an individual that has not been evaluated yet.
pub const UNEVALUATED: u64 = u64::MAX;

/// One candidate solution.
///
/// The error is cached by [`evaluate`](Self::evaluate) and goes stale
/// after [`mutate`](Self::mutate) until the next evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    content: Vec<u8>,
    error: u64,
}

impl Individual {
    /// Creates a random individual.
    ///
    /// The length is uniform in `[0, max_length]` and each character is
    /// uniform over the printable range.
    pub fn random<R: RandomSource + ?Sized>(max_length: usize, rng: &mut R) -> Self {
        let len = random_length(max_length, rng);
        let content = (0..len).map(|_| random_char(rng)).collect();
        Self {
            content,
            error: UNEVALUATED,
        }
    }

    /// Creates an individual holding exactly `text`.
    ///
    /// # Errors
    /// Returns [`EvoError::NonPrintable`] for the first character outside
    /// the printable ASCII range.
    pub fn from_text(text: &str) -> Result<Self> {
        let content = text
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                if is_printable(ch) {
                    Ok(ch as u8)
                } else {
                    Err(EvoError::NonPrintable { ch, index })
                }
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self {
            content,
            error: UNEVALUATED,
        })
    }

    /// Computes, caches and returns the error against `target`.
    ///
    /// `(|len(target) - len(content)| * 128 + sum |target[i] - content[i]|)^2`,
    /// where the sum runs over the indices present in both strings. The
    /// characters missing from the shorter side are covered by the length
    /// penalty alone.
    pub fn evaluate(&mut self, target: &Target) -> u64 {
        self.error = error_against(&self.content, target);
        self.error
    }

    /// The error cached by the last [`evaluate`](Self::evaluate).
    ///
    /// [`UNEVALUATED`] if the individual was never evaluated.
    pub fn error(&self) -> u64 {
        self.error
    }

    /// Applies one round of mutation.
    ///
    /// With probability [`RESIZE_PROBABILITY`] the length is redrawn from
    /// `[0, max_length]`; new slots get random printable characters. Then
    /// every character independently, with probability
    /// [`CHAR_CHANGE_PROBABILITY`], shifts by up to [`MAX_CHAR_STEP`] and is
    /// clamped back into the printable range.
    pub fn mutate<R: RandomSource + ?Sized>(&mut self, max_length: usize, rng: &mut R) {
        if rng.draw_real(0.0, 1.0) < RESIZE_PROBABILITY {
            let len = random_length(max_length, rng);
            if len > self.content.len() {
                let grow = len - self.content.len();
                self.content.extend((0..grow).map(|_| random_char(rng)));
            } else {
                self.content.truncate(len);
            }
        }

        for ch in &mut self.content {
            if rng.draw_real(0.0, 1.0) < CHAR_CHANGE_PROBABILITY {
                let shifted = i64::from(*ch) + rng.draw_int(-MAX_CHAR_STEP, MAX_CHAR_STEP);
                *ch = shifted.clamp(i64::from(MIN_CHAR), i64::from(MAX_CHAR)) as u8;
            }
        }
    }

    /// Returns `true` if the content equals `target` character for character.
    pub fn matches(&self, target: &Target) -> bool {
        let cps = target.code_points();
        cps.len() == self.content.len()
            && cps
                .iter()
                .zip(&self.content)
                .all(|(&t, &c)| t == u32::from(c))
    }

    /// The content as text.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// The content as raw printable ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` for the empty string.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Error of `content` against `target`. Saturates at `u64::MAX`.
fn error_against(content: &[u8], target: &Target) -> u64 {
    let cps = target.code_points();
    let length_gap = cps.len().abs_diff(content.len()) as u64;

    let char_gap: u64 = cps
        .iter()
        .zip(content)
        .map(|(&t, &c)| u64::from(t.abs_diff(u32::from(c))))
        .sum();

    let distance = length_gap
        .saturating_mul(LENGTH_PENALTY)
        .saturating_add(char_gap);
    distance.saturating_mul(distance)
}

fn random_length<R: RandomSource + ?Sized>(max_length: usize, rng: &mut R) -> usize {
    rng.draw_int(0, max_length as i64) as usize
}

fn random_char<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    rng.draw_int(i64::from(MIN_CHAR), i64::from(MAX_CHAR)) as u8
}

fn is_printable(ch: char) -> bool {
    (u32::from(MIN_CHAR)..=u32::from(MAX_CHAR)).contains(&u32::from(ch))
}
