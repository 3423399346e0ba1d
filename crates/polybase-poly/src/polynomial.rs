//! Sparse single-variable polynomials with integer coefficients.
//!
//! Terms are kept sorted by ascending degree, with at most one term per
//! degree and no zero coefficients. Every mutation goes through
//! [`Polynomial::add_term`] or rebuilds the term list wholesale, so the
//! canonical form holds at all times.

use std::cell::OnceCell;
use std::fmt;

use crate::error::AlgebraError;
use crate::list::OrderedList;

/// Variable used when the input names none.
pub const DEFAULT_VARIABLE: char = 'x';

/// A single `coeff * var^degree` term.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    /// Exponent of the variable.
    pub degree: u32,
    /// Signed coefficient.
    pub coeff: i32,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub const fn new(degree: u32, coeff: i32) -> Self {
        Self { degree, coeff }
    }
}

/// A polynomial in one variable.
#[derive(Clone, Debug)]
pub struct Polynomial {
    /// Terms in strictly ascending degree order, none with a zero coefficient.
    terms: OrderedList<Term>,
    /// Variable letter.
    var: char,
    /// Memoized [`export`](Self::export) output, reset on mutation.
    rendered: OnceCell<String>,
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.var == other.var && self.terms == other.terms
    }
}

impl Eq for Polynomial {}

impl Polynomial {
    /// Creates the zero polynomial in `x`.
    #[must_use]
    pub fn zero() -> Self {
        Self::with_variable(DEFAULT_VARIABLE)
    }

    /// Creates the zero polynomial in the given variable.
    #[must_use]
    pub fn with_variable(var: char) -> Self {
        Self {
            terms: OrderedList::new(),
            var,
            rendered: OnceCell::new(),
        }
    }

    /// Builds a polynomial by folding `(degree, coeff)` pairs through the
    /// insertion rule, in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if merging two coefficients overflows `i32`.
    pub fn from_terms<I>(var: char, terms: I) -> Result<Self, AlgebraError>
    where
        I: IntoIterator<Item = (u32, i32)>,
    {
        let mut poly = Self::with_variable(var);
        for (degree, coeff) in terms {
            poly.add_term(Term::new(degree, coeff))?;
        }
        Ok(poly)
    }

    /// Wraps terms the caller guarantees are already canonical.
    pub(crate) fn from_sorted(var: char, terms: OrderedList<Term>) -> Self {
        debug_assert!(terms
            .as_slice()
            .windows(2)
            .all(|w| w[0].degree < w[1].degree));
        debug_assert!(terms.iter().all(|t| t.coeff != 0));
        Self {
            terms,
            var,
            rendered: OnceCell::new(),
        }
    }

    /// Returns the variable letter.
    #[must_use]
    pub fn variable(&self) -> char {
        self.var
    }

    /// Returns the terms in ascending degree order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        self.terms.as_slice()
    }

    /// Returns the number of stored (nonzero) terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the highest degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.tail().map(|t| t.degree)
    }

    /// Returns the term at position `index` in ascending order.
    #[must_use]
    pub fn term(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    /// Returns the coefficient of `var^degree`, or 0 if absent.
    #[must_use]
    pub fn coefficient(&self, degree: u32) -> i32 {
        let pos = self.terms.lower_bound_by(|t| t.degree.cmp(&degree));
        match self.terms.get(pos) {
            Some(t) if t.degree == degree => t.coeff,
            _ => 0,
        }
    }

    /// Merges a term into the polynomial.
    ///
    /// A term at a new degree is inserted in order; otherwise coefficients
    /// are summed and the term disappears if the sum is zero. A zero
    /// coefficient is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the summed coefficient overflows `i32`; the
    /// polynomial is left unchanged.
    pub fn add_term(&mut self, term: Term) -> Result<(), AlgebraError> {
        if term.coeff == 0 {
            return Ok(());
        }

        let pos = self.terms.lower_bound_by(|t| t.degree.cmp(&term.degree));
        let existing = self.terms.get(pos).copied();
        match existing {
            Some(t) if t.degree == term.degree => {
                let sum = t.coeff.checked_add(term.coeff).ok_or(
                    AlgebraError::CoefficientOverflow {
                        degree: term.degree,
                    },
                )?;
                if sum == 0 {
                    self.terms.remove(pos);
                } else if let Some(slot) = self.terms.get_mut(pos) {
                    slot.coeff = sum;
                }
            }
            Some(_) => {
                self.terms.insert_before(pos, term);
            }
            None => self.terms.push_back(term),
        }

        self.rendered.take();
        Ok(())
    }

    /// Removes every term, keeping the variable.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.rendered.take();
    }

    /// Renders the canonical text form, highest degree first.
    ///
    /// `4x^2 + 3x - 7`, `- x + 1`, `0`. The result is memoized until the
    /// next mutation.
    #[must_use]
    pub fn export(&self) -> &str {
        self.rendered.get_or_init(|| self.render())
    }

    fn render(&self) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (i, term) in self.terms.iter().rev().enumerate() {
            let first = i == 0;
            if term.coeff < 0 {
                out.push_str(if first { "- " } else { " - " });
            } else if !first {
                out.push_str(" + ");
            }

            let magnitude = term.coeff.unsigned_abs();
            if magnitude != 1 || term.degree == 0 {
                out.push_str(&magnitude.to_string());
            }
            if term.degree > 0 {
                out.push(self.var);
            }
            if term.degree > 1 {
                out.push('^');
                out.push_str(&term.degree.to_string());
            }
        }
        out
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export())
    }
}
