//! # Polyroot Math
//!
//! Real root extraction for univariate polynomials.
//!
//! This crate provides:
//!
//! - **Polynomial**: Horner evaluation of value and derivative, synthetic
//!   division (deflation) and construction from known roots
//! - **Solvers**: Newton-Raphson iteration over an ordered set of starting
//!   guesses
//! - **Roots**: Repeated locate/deflate cycles that recover every real root
//!   the solver can isolate
//!
//! ## Example
//!
//! ```rust
//! use polyroot_math::extract_all_roots;
//!
//! // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let mut roots = extract_all_roots(&[1.0, -6.0, 11.0, -6.0]);
//! roots.sort_by(f64::total_cmp);
//!
//! assert_eq!(roots.len(), 3);
//! assert!((roots[0] - 1.0).abs() < 1e-6);
//! assert!((roots[2] - 3.0).abs() < 1e-6);
//! ```
//!
//! ## Design Philosophy
//!
//! - **No panics on numeric trouble**: degenerate derivatives, divergence and
//!   repeated roots end a search quietly instead of failing the call
//! - **Immutable inputs**: every deflation produces a fresh polynomial
//! - **Deterministic**: fixed guess order and tolerances give identical output
//!   for identical input

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod polynomial;
pub mod roots;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::polynomial::Polynomial;
    pub use crate::roots::{
        extract_all_roots, round_to, Extraction, ExtractionConfig, RootExtractor, Termination,
    };
    pub use crate::solvers::{
        locate_root, newton_raphson, GuessSet, NewtonLocator, RootLocator, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
pub use polynomial::Polynomial;
pub use roots::extract_all_roots;
