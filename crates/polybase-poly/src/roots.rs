//! Integer root enumeration.
//!
//! By the rational root theorem every nonzero integer root of an integer
//! polynomial divides its free term, the coefficient of the lowest-degree
//! term once the `x^k` factor is taken out. Candidates are the divisors
//! of that term and their negations, each tested exactly.

use log::trace;

use crate::polynomial::Polynomial;

impl Polynomial {
    /// Returns every integer root, deduplicated and ascending.
    ///
    /// The zero polynomial has no roots reported.
    #[must_use]
    pub fn integer_roots(&self) -> Vec<i64> {
        let Some(lowest) = self.terms().first() else {
            return Vec::new();
        };

        let mut roots = Vec::new();
        if lowest.degree != 0 {
            roots.push(0);
        }

        let free = i64::from(lowest.coeff).abs();
        let mut i: i64 = 1;
        while i * i <= free {
            if free % i == 0 {
                for candidate in [i, -i, free / i, -free / i] {
                    if self.is_nonzero_root(candidate) {
                        roots.push(candidate);
                    }
                }
            }
            i += 1;
        }

        roots.sort_unstable();
        roots.dedup();
        roots
    }

    /// Tests whether a nonzero `r` is a root, ignoring the `x^k` factor.
    ///
    /// Uses Horner's scheme from the highest degree down in `i128`. For a
    /// true root every intermediate value is a coefficient of the quotient
    /// by `(x - r)`, which stays small, so an overflow rules `r` out.
    fn is_nonzero_root(&self, r: i64) -> bool {
        let r = i128::from(r);

        let mut acc: i128 = 0;
        let mut prev = None;
        for t in self.terms().iter().rev() {
            if let Some(prev_degree) = prev {
                let gap: u32 = prev_degree - t.degree;
                if acc != 0 {
                    let Some(next) = r.checked_pow(gap).and_then(|p| acc.checked_mul(p)) else {
                        trace!("candidate {r} overflows, not a root");
                        return false;
                    };
                    acc = next;
                }
            }
            let Some(next) = acc.checked_add(i128::from(t.coeff)) else {
                return false;
            };
            acc = next;
            prev = Some(t.degree);
        }

        trace!("candidate {r} evaluates to {acc}");
        acc == 0
    }
}
