//! Parsing polynomial strings into canonical form.

use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::validate;
use crate::polynomial::{Polynomial, Term};

/// Parses a polynomial such as `4x^2 + 3x - 7`.
///
/// Repeated degrees are merged, so `x + x` parses to `2x`. The empty
/// string parses to the zero polynomial.
///
/// # Errors
///
/// Returns the kind and character position of the first problem.
pub fn parse(input: &str) -> Result<Polynomial, ParseError> {
    let var = validate(input)?;

    // Spaces are dropped but original positions are kept for errors.
    let chars: Vec<(usize, char)> = input
        .chars()
        .enumerate()
        .filter(|&(_, c)| c != ' ')
        .collect();

    let mut poly = Polynomial::with_variable(var);
    let mut i = 0;
    while i < chars.len() {
        let start = chars[i].0;

        let mut negative = false;
        if let Some(&(_, sign @ ('+' | '-'))) = chars.get(i) {
            negative = sign == '-';
            i += 1;
        }

        let coeff = match read_number(&chars, &mut i) {
            Some((digits_at, magnitude)) => {
                let signed = if negative { -magnitude } else { magnitude };
                i32::try_from(signed)
                    .map_err(|_| ParseError::new(ParseErrorKind::NumberOutOfRange, digits_at))?
            }
            None if negative => -1,
            None => 1,
        };

        let mut degree = 0;
        if chars.get(i).is_some_and(|&(_, c)| c == var) {
            i += 1;
            degree = 1;
            if chars.get(i).is_some_and(|&(_, c)| c == '^') {
                i += 1;
                if let Some((digits_at, value)) = read_number(&chars, &mut i) {
                    degree = u32::try_from(value)
                        .map_err(|_| ParseError::new(ParseErrorKind::NumberOutOfRange, digits_at))?;
                }
            }
        }

        poly.add_term(Term::new(degree, coeff))
            .map_err(|_| ParseError::new(ParseErrorKind::NumberOutOfRange, start))?;
    }

    Ok(poly)
}

/// Reads a run of digits starting at `*i`, returning the position of the
/// first digit and the value. Values beyond `i64` saturate, which is
/// still out of range for every caller.
fn read_number(chars: &[(usize, char)], i: &mut usize) -> Option<(usize, i64)> {
    let at = chars.get(*i)?.0;
    let mut value: Option<i64> = None;
    while let Some(digit) = chars.get(*i).and_then(|&(_, c)| c.to_digit(10)) {
        let acc = value.unwrap_or(0);
        value = Some(acc.saturating_mul(10).saturating_add(i64::from(digit)));
        *i += 1;
    }
    value.map(|v| (at, v))
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
