//! Ordered starting points for Newton-Raphson.

use serde::{Deserialize, Serialize};

/// Candidate starting values, tried in order.
///
/// The default set is `[0, 1, -1, 2, -2, 3, -3]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessSet {
    guesses: Vec<f64>,
}

impl Default for GuessSet {
    fn default() -> Self {
        Self::symmetric(3)
    }
}

impl GuessSet {
    /// Creates a guess set with an explicit order.
    #[must_use]
    pub fn new(guesses: Vec<f64>) -> Self {
        Self { guesses }
    }

    /// Zero followed by alternating `k, -k` for `k = 1..=span`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyroot_math::solvers::GuessSet;
    ///
    /// assert_eq!(GuessSet::symmetric(2).as_slice(), &[0.0, 1.0, -1.0, 2.0, -2.0]);
    /// ```
    #[must_use]
    pub fn symmetric(span: u32) -> Self {
        let mut guesses = Vec::with_capacity(2 * span as usize + 1);
        guesses.push(0.0);
        for k in 1..=span {
            let k = f64::from(k);
            guesses.push(k);
            guesses.push(-k);
        }
        Self { guesses }
    }

    /// Returns the guesses in priority order.
    pub fn as_slice(&self) -> &[f64] {
        &self.guesses
    }

    /// Iterates over the guesses in priority order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.guesses.iter().copied()
    }

    /// Number of guesses.
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Returns true if there are no guesses.
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

impl From<Vec<f64>> for GuessSet {
    fn from(guesses: Vec<f64>) -> Self {
        Self::new(guesses)
    }
}
