//! # polybase-poly
//!
//! Single-variable polynomials with 32-bit integer coefficients.
//!
//! This crate provides:
//! - A grammar validator that pinpoints the first bad character
//! - Parsing into a canonical sorted, zero-free term list
//! - Addition, multiplication, derivatives and evaluation
//! - Integer root enumeration via the rational root theorem
//! - Canonical text export that parses back to the same polynomial
//!
//! ## Text Format
//!
//! `4x^2 + 3x - 7`: terms of an optional sign, an optional coefficient,
//! and an optional variable with an optional `^degree`. Any single ASCII
//! letter may serve as the variable; `x` is assumed when none appears.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod error;
pub mod grammar;
pub mod list;
pub mod parse;
pub mod polynomial;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use error::{AlgebraError, ParseError, ParseErrorKind};
pub use grammar::validate;
pub use list::OrderedList;
pub use parse::parse;
pub use polynomial::{Polynomial, Term, DEFAULT_VARIABLE};
