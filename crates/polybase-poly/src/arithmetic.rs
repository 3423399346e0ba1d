//! Polynomial arithmetic over the sorted term representation.
//!
//! All operations return fresh polynomials and preserve the canonical
//! form. Coefficient and degree arithmetic is checked; leaving the 32-bit
//! range is reported as an [`AlgebraError`].

use std::ops::{Add, Mul};

use num_traits::{CheckedAdd, CheckedMul, One, Zero};

use crate::error::AlgebraError;
use crate::list::OrderedList;
use crate::polynomial::{Polynomial, Term};

impl Polynomial {
    /// Adds two polynomials with a single merge of both term lists.
    ///
    /// The result uses `self`'s variable.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient sum overflows `i32`.
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        let a = self.terms();
        let b = other.terms();
        let mut out = OrderedList::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            let (l, r) = (a[i], b[j]);
            if l.degree == r.degree {
                let coeff = l
                    .coeff
                    .checked_add(r.coeff)
                    .ok_or(AlgebraError::CoefficientOverflow { degree: l.degree })?;
                if coeff != 0 {
                    out.push_back(Term::new(l.degree, coeff));
                }
                i += 1;
                j += 1;
            } else if l.degree < r.degree {
                out.push_back(l);
                i += 1;
            } else {
                out.push_back(r);
                j += 1;
            }
        }
        out.extend(a[i..].iter().copied());
        out.extend(b[j..].iter().copied());

        Ok(Self::from_sorted(self.variable(), out))
    }

    /// Multiplies every term by `term`: degrees shift, coefficients scale.
    ///
    /// # Errors
    ///
    /// Returns an error if a degree or coefficient leaves its range.
    pub fn mul_term(&self, term: Term) -> Result<Self, AlgebraError> {
        if term.coeff == 0 {
            return Ok(Self::with_variable(self.variable()));
        }

        let mut out = OrderedList::with_capacity(self.len());
        for t in self.terms() {
            let degree = t
                .degree
                .checked_add(term.degree)
                .ok_or(AlgebraError::DegreeOverflow)?;
            let coeff = t
                .coeff
                .checked_mul(term.coeff)
                .ok_or(AlgebraError::CoefficientOverflow { degree })?;
            out.push_back(Term::new(degree, coeff));
        }

        Ok(Self::from_sorted(self.variable(), out))
    }

    /// Multiplies two polynomials.
    ///
    /// Each term of `self` scales `other` and the partial products are
    /// folded together with [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns an error if a degree or coefficient leaves its range.
    pub fn mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        let mut result = Self::with_variable(self.variable());
        for &t in self.terms() {
            let partial = other.mul_term(t)?;
            result = result.add(&partial)?;
        }
        Ok(result)
    }

    /// Computes the `n`-th derivative.
    ///
    /// Terms of degree below `n` vanish; the rest are multiplied by the
    /// falling factorial `d (d-1) ... (d-n+1)` and lose `n` degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient overflows `i32`.
    pub fn derivative(&self, n: u32) -> Result<Self, AlgebraError> {
        if n == 0 {
            return Ok(self.clone());
        }

        let mut out = OrderedList::with_capacity(self.len());
        for t in self.terms().iter().filter(|t| t.degree >= n) {
            let degree = t.degree - n;
            let mut coeff = t.coeff;
            for k in degree + 1..=t.degree {
                let factor =
                    i32::try_from(k).map_err(|_| AlgebraError::CoefficientOverflow { degree })?;
                coeff = coeff
                    .checked_mul(factor)
                    .ok_or(AlgebraError::CoefficientOverflow { degree })?;
            }
            out.push_back(Term::new(degree, coeff));
        }

        Ok(Self::from_sorted(self.variable(), out))
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Walks the terms in ascending order, raising a running power of `x`
    /// by the gap to each next degree. Overflow behaves as `T`'s operators
    /// do; see [`checked_evaluate`](Self::checked_evaluate) for integers.
    pub fn evaluate<T>(&self, x: T) -> T
    where
        T: Copy + Zero + One + Add<Output = T> + Mul<Output = T> + From<i32>,
    {
        let mut power = T::one();
        let mut last = 0;
        let mut result = T::zero();
        for t in self.terms() {
            power = power * num_traits::pow(x, (t.degree - last) as usize);
            last = t.degree;
            result = result + T::from(t.coeff) * power;
        }
        result
    }

    /// Evaluates the polynomial at `x`, returning `None` on overflow.
    pub fn checked_evaluate<T>(&self, x: T) -> Option<T>
    where
        T: Copy + Zero + One + CheckedAdd + CheckedMul + From<i32>,
    {
        let mut power = T::one();
        let mut last = 0;
        let mut result = T::zero();
        for t in self.terms() {
            let step = num_traits::checked_pow(x, usize::try_from(t.degree - last).ok()?)?;
            power = power.checked_mul(&step)?;
            last = t.degree;
            result = result.checked_add(&T::from(t.coeff).checked_mul(&power)?)?;
        }
        Some(result)
    }
}
