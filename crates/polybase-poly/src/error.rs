//! Errors raised while parsing and combining polynomials.

use thiserror::Error;

/// The reason a polynomial string was rejected.
///
/// Kinds are listed in the order they are checked; an input reports the
/// first one that applies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ParseErrorKind {
    /// A character that is not a digit, letter, `^`, sign or space.
    UnknownCharacters,
    /// A second, different variable letter.
    MultipleVariables,
    /// A coefficient (or term) was expected, e.g. after a trailing sign.
    ExpectedCoefficient,
    /// A variable was expected after a coefficient, e.g. in `4^3`.
    ExpectedVariable,
    /// A `^` was expected after the variable, e.g. in `4x3`.
    ExpectedPowerSymbol,
    /// Degree digits were expected after `^`, e.g. in `4x^x`.
    ExpectedDegree,
    /// A coefficient or degree does not fit the integer range.
    NumberOutOfRange,
}

impl ParseErrorKind {
    /// Short human-readable description, as shown next to the caret.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ParseErrorKind::UnknownCharacters => "Unknown character",
            ParseErrorKind::MultipleVariables => "Multiple variables aren't allowed",
            ParseErrorKind::ExpectedCoefficient => "Expected coefficient",
            ParseErrorKind::ExpectedVariable => "Expected variable",
            ParseErrorKind::ExpectedPowerSymbol => "Expected the '^' symbol after variable",
            ParseErrorKind::ExpectedDegree => "Expected degree",
            ParseErrorKind::NumberOutOfRange => "Number out of range",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A rejected polynomial string.
///
/// `position` is a character index into the original input, spaces
/// included, so a caret can be placed under the offending character.
/// It equals the input length when the input ended too early.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Where it went wrong.
    pub position: usize,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Arithmetic that left the 32-bit coefficient or degree range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
pub enum AlgebraError {
    /// A coefficient no longer fits in `i32`.
    #[error("coefficient overflow at degree {degree}")]
    CoefficientOverflow {
        /// Degree of the offending term.
        degree: u32,
    },

    /// A degree no longer fits in `u32`.
    #[error("degree overflow")]
    DegreeOverflow,
}
