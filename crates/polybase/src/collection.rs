//! An ordered, position-addressed collection of polynomials.
//!
//! Positions are 0-based. Every lookup is bounds-checked and fails with
//! [`CollectionError::OutOfRange`] rather than clamping. Arithmetic
//! results are new polynomials; the caller decides whether to store them.

use log::debug;
use thiserror::Error;

use polybase_poly::{parse, AlgebraError, OrderedList, ParseError, Polynomial};

/// Errors from collection operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// No polynomial at this position.
    #[error("polynomial with index {index} isn't present in the collection of {len}")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Collection size at the time.
        len: usize,
    },

    /// The text did not parse; the collection is unchanged.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The result left the 32-bit range.
    #[error("arithmetic error: {0}")]
    Algebra(#[from] AlgebraError),
}

/// Result alias for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Owns a sequence of polynomials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    polys: OrderedList<Polynomial>,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of polynomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Iterates in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Polynomial> {
        self.polys.iter()
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::OutOfRange {
            index,
            len: self.polys.len(),
        }
    }

    /// Returns the polynomial at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Polynomial> {
        self.polys.get(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Returns the polynomial at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Polynomial> {
        let len = self.polys.len();
        self.polys
            .get_mut(index)
            .ok_or(CollectionError::OutOfRange { index, len })
    }

    /// Returns the first polynomial.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the collection is empty.
    pub fn first(&self) -> Result<&Polynomial> {
        self.polys.head().ok_or_else(|| self.out_of_range(0))
    }

    /// Returns the last polynomial.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the collection is empty.
    pub fn last(&self) -> Result<&Polynomial> {
        self.polys.tail().ok_or_else(|| self.out_of_range(0))
    }

    /// Appends a polynomial.
    pub fn push(&mut self, poly: Polynomial) {
        debug!("push #{}: {}", self.polys.len(), poly);
        self.polys.push_back(poly);
    }

    /// Inserts a polynomial directly after position `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`; nothing is inserted.
    pub fn insert_after(&mut self, index: usize, poly: Polynomial) -> Result<()> {
        debug!("insert after #{index}: {poly}");
        match self.polys.insert_after(index, poly) {
            Some(_) => Ok(()),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Removes and returns the polynomial at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<Polynomial> {
        let removed = self
            .polys
            .remove(index)
            .ok_or_else(|| self.out_of_range(index))?;
        debug!("removed #{index}: {removed}");
        Ok(removed)
    }

    /// Parses `text` and appends the result.
    ///
    /// # Errors
    ///
    /// Returns the parse error unchanged; the collection is untouched.
    pub fn parse_and_push(&mut self, text: &str) -> std::result::Result<(), ParseError> {
        let poly = parse(text)?;
        self.push(poly);
        Ok(())
    }

    /// Parses `text` and inserts the result after position `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad position (checked first) or the
    /// parse error; either way the collection is untouched.
    pub fn parse_and_insert_after(&mut self, index: usize, text: &str) -> Result<()> {
        if index >= self.polys.len() {
            return Err(self.out_of_range(index));
        }
        let poly = parse(text)?;
        self.insert_after(index, poly)
    }

    /// Returns the sum of the polynomials at `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad position or `Algebra` on overflow.
    pub fn add(&self, lhs: usize, rhs: usize) -> Result<Polynomial> {
        Ok(self.get(lhs)?.add(self.get(rhs)?)?)
    }

    /// Returns the product of the polynomials at `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad position or `Algebra` on overflow.
    pub fn multiply(&self, lhs: usize, rhs: usize) -> Result<Polynomial> {
        Ok(self.get(lhs)?.mul(self.get(rhs)?)?)
    }

    /// Returns the `n`-th derivative of the polynomial at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad position or `Algebra` on overflow.
    pub fn derivative(&self, index: usize, n: u32) -> Result<Polynomial> {
        Ok(self.get(index)?.derivative(n)?)
    }

    /// Returns the integer roots of the polynomial at `index`, ascending.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad position.
    pub fn integer_roots(&self, index: usize) -> Result<Vec<i64>> {
        Ok(self.get(index)?.integer_roots())
    }

    /// Returns the coefficient of `var^degree` in the polynomial at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad position.
    pub fn coefficient(&self, index: usize, degree: u32) -> Result<i32> {
        Ok(self.get(index)?.coefficient(degree))
    }

    /// Evaluates the polynomial at `index` at `x`, `None` on overflow.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a bad position.
    pub fn evaluate(&self, index: usize, x: i64) -> Result<Option<i64>> {
        Ok(self.get(index)?.checked_evaluate(x))
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Polynomial;
    type IntoIter = std::slice::Iter<'a, Polynomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.polys.iter()
    }
}

impl FromIterator<Polynomial> for Collection {
    fn from_iter<I: IntoIterator<Item = Polynomial>>(iter: I) -> Self {
        Self {
            polys: iter.into_iter().collect(),
        }
    }
}
