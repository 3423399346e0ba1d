//! Grammar validation for polynomial strings.
//!
//! Inputs have the shape
//!
//! ```text
//! [sign] [coeff] [var [^ degree]] ( sign [coeff] [var [^ degree]] )*
//! ```
//!
//! with spaces allowed between tokens. Validation runs a small
//! deterministic automaton over character classes. The error reported on
//! a failed transition depends on the state it failed in, not only on
//! the character, so the error tables live on [`State`].

use log::debug;

use crate::error::{ParseError, ParseErrorKind};
use crate::polynomial::DEFAULT_VARIABLE;

/// Character classes driving the automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CharClass {
    /// `0`-`9`.
    Digit,
    /// An ASCII letter.
    Letter,
    /// `^`.
    Caret,
    /// `+` or `-`.
    Sign,
    /// A space.
    Space,
}

impl CharClass {
    /// Classifies a character, or `None` if it may not appear at all.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(CharClass::Digit),
            c if c.is_ascii_alphabetic() => Some(CharClass::Letter),
            '^' => Some(CharClass::Caret),
            '+' | '-' => Some(CharClass::Sign),
            ' ' => Some(CharClass::Space),
            _ => None,
        }
    }
}

/// Automaton states. A failed [`step`](State::step) is the reject sink.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum State {
    /// Nothing read yet (leading spaces only).
    Start,
    /// Just read a sign.
    Sign,
    /// Inside coefficient digits.
    Coefficient,
    /// Just read the variable.
    Variable,
    /// Just read `^`.
    Caret,
    /// Inside degree digits.
    Degree,
    /// Spaces after a coefficient.
    CoefficientSpace,
    /// Spaces after a degree.
    DegreeSpace,
}

impl State {
    /// Advances on one character class.
    ///
    /// # Errors
    ///
    /// Returns the state's failure kind when no transition is defined.
    pub fn step(self, class: CharClass) -> Result<State, ParseErrorKind> {
        use CharClass as C;
        use State as S;

        let next = match (self, class) {
            (S::Start, C::Space) => S::Start,
            (S::Sign, C::Space) => S::Sign,
            (S::Start | S::Sign | S::Coefficient, C::Digit) => S::Coefficient,
            (S::Start | S::Sign | S::Coefficient | S::CoefficientSpace, C::Letter) => S::Variable,
            (S::Start | S::Coefficient | S::Variable | S::Degree, C::Sign) => S::Sign,
            (S::CoefficientSpace | S::DegreeSpace, C::Sign) => S::Sign,
            (S::Coefficient | S::CoefficientSpace, C::Space) => S::CoefficientSpace,
            (S::Variable, C::Space) => S::Variable,
            (S::Variable, C::Caret) => S::Caret,
            (S::Caret, C::Space) => S::Caret,
            (S::Caret | S::Degree, C::Digit) => S::Degree,
            (S::Degree | S::DegreeSpace, C::Space) => S::DegreeSpace,
            _ => return Err(self.on_fail()),
        };
        Ok(next)
    }

    /// Error reported when a character has no transition from this state.
    #[must_use]
    pub const fn on_fail(self) -> ParseErrorKind {
        match self {
            State::Start | State::Sign | State::Degree | State::DegreeSpace => {
                ParseErrorKind::ExpectedCoefficient
            }
            State::Coefficient | State::CoefficientSpace => ParseErrorKind::ExpectedVariable,
            State::Variable => ParseErrorKind::ExpectedPowerSymbol,
            State::Caret => ParseErrorKind::ExpectedDegree,
        }
    }

    /// Error reported when input ends in this state, `None` if accepting.
    #[must_use]
    pub const fn on_leave(self) -> Option<ParseErrorKind> {
        match self {
            State::Sign => Some(ParseErrorKind::ExpectedCoefficient),
            State::Caret => Some(ParseErrorKind::ExpectedDegree),
            _ => None,
        }
    }
}

/// Validates `input` and returns its variable letter.
///
/// Positions in the error are character indices into `input`.
///
/// # Errors
///
/// Returns the first problem found, checked in this order: unknown
/// characters, the automaton, then multiple variables.
pub fn validate(input: &str) -> Result<char, ParseError> {
    let reject = |kind: ParseErrorKind, position: usize| {
        debug!("rejected {input:?}: {kind} at {position}");
        Err(ParseError::new(kind, position))
    };

    let mut classes = Vec::with_capacity(input.len());
    for (i, c) in input.chars().enumerate() {
        match CharClass::of(c) {
            Some(class) => classes.push(class),
            None => return reject(ParseErrorKind::UnknownCharacters, i),
        }
    }

    let mut state = State::Start;
    for (i, &class) in classes.iter().enumerate() {
        match state.step(class) {
            Ok(next) => state = next,
            Err(kind) => return reject(kind, i),
        }
    }
    if let Some(kind) = state.on_leave() {
        return reject(kind, classes.len());
    }

    let mut var = None;
    for (i, c) in input.chars().enumerate() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        match var {
            None => var = Some(c),
            Some(v) if v != c => return reject(ParseErrorKind::MultipleVariables, i),
            Some(_) => {}
        }
    }

    Ok(var.unwrap_or(DEFAULT_VARIABLE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(input: &str) -> (ParseErrorKind, usize) {
        let e = validate(input).unwrap_err();
        (e.kind, e.position)
    }

    #[test]
    fn test_accepts() {
        for input in [
            "",
            "   ",
            "4x^2 + 3x - 7",
            "-x",
            "- x",
            "+5",
            "x ^ 2",
            "2 x",
            "x^10-x^3+1",
            "7",
            "0",
        ] {
            assert!(validate(input).is_ok(), "{input:?} should be accepted");
        }
    }

    #[test]
    fn test_variable() {
        assert_eq!(validate("4t^2 + t").unwrap(), 't');
        assert_eq!(validate("17").unwrap(), 'x');
        assert_eq!(validate("").unwrap(), 'x');
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(err("4(x^2)"), (ParseErrorKind::UnknownCharacters, 1));
        assert_eq!(err("x*2"), (ParseErrorKind::UnknownCharacters, 1));
        assert_eq!(err("x\t+ 1"), (ParseErrorKind::UnknownCharacters, 1));
        // Checked before the automaton even when a grammar error comes first
        assert_eq!(err("^^ 1.5"), (ParseErrorKind::UnknownCharacters, 4));
    }

    #[test]
    fn test_unknown_characters_use_char_positions() {
        assert_eq!(err("ü + x"), (ParseErrorKind::UnknownCharacters, 0));
        assert_eq!(err("x + é"), (ParseErrorKind::UnknownCharacters, 4));
    }

    #[test]
    fn test_multiple_variables() {
        assert_eq!(err("x^2 + 4y^2"), (ParseErrorKind::MultipleVariables, 7));
        assert_eq!(err("x + X"), (ParseErrorKind::MultipleVariables, 4));
    }

    #[test]
    fn test_grammar_checked_before_variables() {
        assert_eq!(err("x + y^"), (ParseErrorKind::ExpectedDegree, 6));
    }

    #[test]
    fn test_expected_coefficient() {
        assert_eq!(err("x^2 +"), (ParseErrorKind::ExpectedCoefficient, 5));
        assert_eq!(err("x^2 + "), (ParseErrorKind::ExpectedCoefficient, 6));
        assert_eq!(err("+-x"), (ParseErrorKind::ExpectedCoefficient, 1));
        assert_eq!(err("^2"), (ParseErrorKind::ExpectedCoefficient, 0));
        assert_eq!(err("x^2 3"), (ParseErrorKind::ExpectedCoefficient, 4));
        assert_eq!(err("x^2x"), (ParseErrorKind::ExpectedCoefficient, 3));
    }

    #[test]
    fn test_expected_variable() {
        assert_eq!(err("4^3"), (ParseErrorKind::ExpectedVariable, 1));
        assert_eq!(err("4 3"), (ParseErrorKind::ExpectedVariable, 2));
        assert_eq!(err("4 ^3"), (ParseErrorKind::ExpectedVariable, 2));
    }

    #[test]
    fn test_expected_power_symbol() {
        assert_eq!(err("4x3"), (ParseErrorKind::ExpectedPowerSymbol, 2));
        assert_eq!(err("xx"), (ParseErrorKind::ExpectedPowerSymbol, 1));
        assert_eq!(err("x 2"), (ParseErrorKind::ExpectedPowerSymbol, 2));
    }

    #[test]
    fn test_expected_degree() {
        assert_eq!(err("4x^x"), (ParseErrorKind::ExpectedDegree, 3));
        assert_eq!(err("4x^"), (ParseErrorKind::ExpectedDegree, 3));
        assert_eq!(err("4x^ "), (ParseErrorKind::ExpectedDegree, 4));
        assert_eq!(err("x^-1"), (ParseErrorKind::ExpectedDegree, 2));
    }

    #[test]
    fn test_on_leave_table() {
        let accepting = [
            State::Start,
            State::Coefficient,
            State::Variable,
            State::Degree,
            State::CoefficientSpace,
            State::DegreeSpace,
        ];
        for state in accepting {
            assert_eq!(state.on_leave(), None);
        }
        assert_eq!(State::Sign.on_leave(), Some(ParseErrorKind::ExpectedCoefficient));
        assert_eq!(State::Caret.on_leave(), Some(ParseErrorKind::ExpectedDegree));
    }
}
