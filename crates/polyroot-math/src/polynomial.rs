//! Dense univariate polynomials with real coefficients.
//!
//! Coefficients are stored highest degree first, so `[a0, a1, ..., an]`
//! represents `a0*x^n + a1*x^(n-1) + ... + an`.
//!
//! Every operation that changes the degree returns a new [`Polynomial`];
//! the receiver is never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A polynomial given by its coefficients, highest degree first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered highest degree first.
    ///
    /// No validation is performed: a leading zero, an empty vector or
    /// non-finite values are accepted and simply propagate through the
    /// arithmetic.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Builds the monic polynomial `(x - r0)(x - r1)...` from its roots.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyroot_math::Polynomial;
    ///
    /// let p = Polynomial::from_roots(&[1.0, 2.0, 3.0]);
    /// assert_eq!(p.coefficients(), &[1.0, -6.0, 11.0, -6.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[f64]) -> Self {
        roots
            .iter()
            .fold(Self::new(vec![1.0]), |p, &r| p.multiply_by_root(r))
    }

    /// Returns the coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Consumes the polynomial and returns its coefficients.
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    /// Degree of the polynomial: number of coefficients minus one.
    ///
    /// An empty coefficient list is treated as degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns true if there are no coefficients at all.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluates `(P(x), P'(x))` with Horner's scheme.
    ///
    /// Value and derivative are accumulated in the same pass: after each
    /// value update the derivative absorbs the new partial value, except on
    /// the last coefficient which only contributes to `P(x)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyroot_math::Polynomial;
    ///
    /// // x^2 - 4 at x = 3: value 5, slope 6
    /// let p = Polynomial::from(vec![1.0, 0.0, -4.0]);
    /// assert_eq!(p.evaluate(3.0), (5.0, 6.0));
    /// ```
    pub fn evaluate(&self, x: f64) -> (f64, f64) {
        evaluate(&self.coefficients, x)
    }

    /// Evaluates `P(x)` only.
    pub fn value_at(&self, x: f64) -> f64 {
        self.evaluate(x).0
    }

    /// Divides by `(x - root)`, returning the quotient and the remainder.
    ///
    /// The remainder equals `P(root)`.
    pub fn synthetic_division(&self, root: f64) -> (Self, f64) {
        let Some((&lead, rest)) = self.coefficients.split_first() else {
            return (Self::default(), 0.0);
        };

        let mut quotient = Vec::with_capacity(self.coefficients.len());
        quotient.push(lead);
        for &c in rest {
            let carry = quotient[quotient.len() - 1] * root;
            quotient.push(c + carry);
        }

        // The final carried value is the remainder.
        let remainder = quotient.pop().unwrap_or(0.0);
        (Self::new(quotient), remainder)
    }

    /// Deflates by a known root, producing a polynomial one degree lower.
    ///
    /// The remainder of the division is discarded without being checked.
    #[must_use]
    pub fn deflate(&self, root: f64) -> Self {
        Self::new(deflate(&self.coefficients, root))
    }

    /// Multiplies by `(x - root)`, the inverse of [`deflate`](Self::deflate).
    #[must_use]
    pub fn multiply_by_root(&self, root: f64) -> Self {
        let Some(&last) = self.coefficients.last() else {
            return Self::default();
        };

        let mut product = Vec::with_capacity(self.coefficients.len() + 1);
        product.push(self.coefficients[0]);
        for pair in self.coefficients.windows(2) {
            product.push(pair[1] - root * pair[0]);
        }
        product.push(-root * last);

        Self::new(product)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl From<&[i32]> for Polynomial {
    fn from(coefficients: &[i32]) -> Self {
        Self::new(coefficients.iter().copied().map(f64::from).collect())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut wrote_term = false;

        for (i, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let power = degree - i;
            let magnitude = c.abs();

            if wrote_term {
                f.write_str(if c < 0.0 { " - " } else { " + " })?;
            } else if c < 0.0 {
                f.write_str("-")?;
            }

            if magnitude != 1.0 || power == 0 {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", power)?,
            }
            wrote_term = true;
        }

        if !wrote_term {
            f.write_str("0")?;
        }
        Ok(())
    }
}

/// Evaluates a coefficient slice and its derivative at `x`.
///
/// See [`Polynomial::evaluate`].
pub fn evaluate(coefficients: &[f64], x: f64) -> (f64, f64) {
    let n = coefficients.len();
    match n {
        0 => return (0.0, 0.0),
        1 => return (coefficients[0], 0.0),
        _ => {}
    }

    let mut value = coefficients[0];
    let mut deriv = coefficients[0];
    for (i, &c) in coefficients.iter().enumerate().skip(1) {
        value = value * x + c;
        if i < n - 1 {
            deriv = deriv * x + value;
        }
    }

    (value, deriv)
}

/// Synthetic division of a coefficient slice by `(x - root)`, remainder dropped.
///
/// See [`Polynomial::deflate`].
pub fn deflate(coefficients: &[f64], root: f64) -> Vec<f64> {
    let degree = coefficients.len().saturating_sub(1);
    let mut result = Vec::with_capacity(degree);
    for &c in coefficients.iter().take(degree) {
        let next = result.last().map_or(c, |&prev| c + prev * root);
        result.push(next);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn direct_sum(coefficients: &[f64], x: f64) -> f64 {
        let n = coefficients.len();
        coefficients
            .iter()
            .enumerate()
            .map(|(i, &a)| a * x.powi((n - 1 - i) as i32))
            .sum()
    }

    #[test]
    fn test_evaluate_cubic() {
        let p = Polynomial::from(vec![1.0, -6.0, 11.0, -6.0]);

        // P(x) = x^3 - 6x^2 + 11x - 6, P'(x) = 3x^2 - 12x + 11
        let (value, deriv) = p.evaluate(4.0);
        assert_relative_eq!(value, 6.0);
        assert_relative_eq!(deriv, 11.0);

        let (value, deriv) = p.evaluate(2.0);
        assert_relative_eq!(value, 0.0);
        assert_relative_eq!(deriv, -1.0);
    }

    #[test]
    fn test_evaluate_linear() {
        let p = Polynomial::from(vec![2.0, -3.0]);
        assert_eq!(p.evaluate(5.0), (7.0, 2.0));
    }

    #[test]
    fn test_evaluate_degenerate() {
        assert_eq!(Polynomial::from(vec![4.0]).evaluate(10.0), (4.0, 0.0));
        assert_eq!(Polynomial::default().evaluate(10.0), (0.0, 0.0));
    }

    #[test]
    fn test_evaluate_propagates_nan() {
        let (value, deriv) = Polynomial::from(vec![1.0, f64::NAN]).evaluate(1.0);
        assert!(value.is_nan());
        assert_relative_eq!(deriv, 1.0);
    }

    #[test]
    fn test_degree() {
        assert_eq!(Polynomial::from(vec![1.0, 0.0, -10.0, 0.0, 9.0]).degree(), 4);
        assert_eq!(Polynomial::from(vec![3.0]).degree(), 0);
        assert_eq!(Polynomial::default().degree(), 0);
    }

    #[test]
    fn test_from_integers() {
        let p = Polynomial::from(&[1, 1, -1, -1][..]);
        assert_eq!(p.coefficients(), &[1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_deflate_known_root() {
        let p = Polynomial::from(vec![1.0, -6.0, 11.0, -6.0]);
        let q = p.deflate(1.0);

        assert_eq!(q.coefficients(), &[1.0, -5.0, 6.0]);
        // Input untouched
        assert_eq!(p.coefficients(), &[1.0, -6.0, 11.0, -6.0]);
    }

    #[test]
    fn test_deflate_slice_matches_method() {
        let coefficients = [2.0, -3.0, 0.5, 7.0];
        let p = Polynomial::from(&coefficients[..]);
        assert_eq!(deflate(&coefficients, 1.25), p.deflate(1.25).into_coefficients());
    }

    #[test]
    fn test_deflate_linear_and_constant() {
        assert_eq!(Polynomial::from(vec![2.0, -4.0]).deflate(2.0).coefficients(), &[2.0]);
        assert!(Polynomial::from(vec![5.0]).deflate(1.0).is_empty());
        assert!(Polynomial::default().deflate(1.0).is_empty());
    }

    #[test]
    fn test_synthetic_division_remainder() {
        let p = Polynomial::from(vec![1.0, 0.0, -4.0]);
        let (q, r) = p.synthetic_division(3.0);

        assert_eq!(q.coefficients(), &[1.0, 3.0]);
        assert_relative_eq!(r, p.value_at(3.0));
    }

    #[test]
    fn test_from_roots() {
        let p = Polynomial::from_roots(&[1.0, -1.0, 3.0, -3.0]);
        assert_eq!(p.coefficients(), &[1.0, 0.0, -10.0, 0.0, 9.0]);
        assert_eq!(Polynomial::from_roots(&[]).coefficients(), &[1.0]);
    }

    #[test]
    fn test_multiply_inverts_deflate() {
        let p = Polynomial::from(vec![1.0, 1.0, -1.0, -1.0]);
        let rebuilt = p.deflate(1.0).multiply_by_root(1.0);
        assert_eq!(rebuilt, p);
    }

    #[test]
    fn test_display() {
        let show = |c: Vec<f64>| Polynomial::from(c).to_string();

        assert_eq!(show(vec![1.0, -6.0, 11.0, -6.0]), "x^3 - 6x^2 + 11x - 6");
        assert_eq!(show(vec![1.0, 0.0, -10.0, 0.0, 9.0]), "x^4 - 10x^2 + 9");
        assert_eq!(show(vec![-1.0, 1.0]), "-x + 1");
        assert_eq!(show(vec![2.5, 0.0]), "2.5x");
        assert_eq!(show(vec![0.0, 0.0]), "0");
        assert_eq!(show(vec![]), "0");
        assert_eq!(show(vec![-3.0]), "-3");
    }

    #[test]
    fn test_serde_transparent() {
        let p = Polynomial::from(vec![1.0, -2.0]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.0,-2.0]");

        let back: Polynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    proptest! {
        #[test]
        fn prop_horner_matches_direct_sum(
            coefficients in prop::collection::vec(-10.0f64..10.0, 1..8),
            x in -3.0f64..3.0,
        ) {
            let (value, _) = evaluate(&coefficients, x);
            let expected = direct_sum(&coefficients, x);
            let scale: f64 = coefficients
                .iter()
                .enumerate()
                .map(|(i, a)| a.abs() * x.abs().powi((coefficients.len() - 1 - i) as i32))
                .sum();
            prop_assert!((value - expected).abs() <= 1e-12 * (1.0 + scale));
        }

        #[test]
        fn prop_division_reconstructs(
            coefficients in prop::collection::vec(-10.0f64..10.0, 2..8),
            root in -3.0f64..3.0,
        ) {
            let p = Polynomial::from(coefficients.clone());
            let (quotient, remainder) = p.synthetic_division(root);
            let mut rebuilt = quotient.multiply_by_root(root).into_coefficients();
            let last = rebuilt.len() - 1;
            rebuilt[last] += remainder;

            prop_assert_eq!(rebuilt.len(), coefficients.len());
            for (a, b) in rebuilt.iter().zip(&coefficients) {
                prop_assert!((a - b).abs() <= 1e-9 * (1.0 + b.abs()) * 100.0);
            }
        }

        #[test]
        fn prop_deflate_at_root_rebuilds(
            roots in prop::collection::vec(-4.0f64..4.0, 1..6),
        ) {
            let p = Polynomial::from_roots(&roots);
            let rebuilt = p.deflate(roots[0]).multiply_by_root(roots[0]);

            for (a, b) in rebuilt.coefficients().iter().zip(p.coefficients()) {
                prop_assert!((a - b).abs() <= 1e-9 * (1.0 + b.abs()) * 100.0);
            }
        }
    }
}
