//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::parse::parse;
    use crate::polynomial::{Polynomial, Term};

    // Small coefficients keep products well inside i32
    fn small_coeff() -> impl Strategy<Value = i32> {
        -100i32..100i32
    }

    // Sparse polynomials of degree 0-8 with up to 5 terms
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((0u32..=8, small_coeff()), 0..=5)
            .prop_map(|terms| Polynomial::from_terms('x', terms).unwrap())
    }

    fn is_canonical(p: &Polynomial) -> bool {
        p.terms().windows(2).all(|w| w[0].degree < w[1].degree)
            && p.terms().iter().all(|t| t.coeff != 0)
    }

    proptest! {
        // Export and parse

        #[test]
        fn export_parse_round_trip(p in small_poly()) {
            let parsed = parse(p.export()).unwrap();
            prop_assert_eq!(parsed.terms(), p.terms());
        }

        #[test]
        fn add_term_then_negation_cancels(p in small_poly(), d in 0u32..=8, c in 1i32..100) {
            let mut q = p.clone();
            let before = q.coefficient(d);
            q.add_term(Term::new(d, c)).unwrap();
            q.add_term(Term::new(d, -c)).unwrap();
            prop_assert_eq!(q.coefficient(d), before);
            prop_assert_eq!(q, p);
        }

        #[test]
        fn add_term_on_empty_degree_leaves_nothing(d in 0u32..=8, c in 1i32..100) {
            let mut q = Polynomial::zero();
            q.add_term(Term::new(d, c)).unwrap();
            q.add_term(Term::new(d, -c)).unwrap();
            prop_assert!(q.terms().iter().all(|t| t.degree != d));
        }

        // Ring laws

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.add(&b).unwrap().add(&c).unwrap();
            let right = a.add(&b.add(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c).unwrap()).unwrap();
            let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn results_stay_canonical(a in small_poly(), b in small_poly(), n in 0u32..4) {
            prop_assert!(is_canonical(&a.add(&b).unwrap()));
            prop_assert!(is_canonical(&a.mul(&b).unwrap()));
            prop_assert!(is_canonical(&a.derivative(n).unwrap()));
        }

        // Derivatives

        #[test]
        fn derivative_of_constant_is_empty(c in small_coeff()) {
            let p = Polynomial::from_terms('x', [(0, c)]).unwrap();
            prop_assert!(p.derivative(1).unwrap().is_empty());
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            let left = a.add(&b).unwrap().derivative(1).unwrap();
            let right = a.derivative(1).unwrap().add(&b.derivative(1).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn derivative_composes(a in small_poly()) {
            let twice = a.derivative(1).unwrap().derivative(1).unwrap();
            prop_assert_eq!(twice, a.derivative(2).unwrap());
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -5i64..5) {
            let sum = a.add(&b).unwrap();
            prop_assert_eq!(sum.evaluate(x), a.evaluate(x) + b.evaluate(x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -5i64..5) {
            let product = a.mul(&b).unwrap();
            prop_assert_eq!(product.evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        // Roots

        #[test]
        fn roots_of_linear_factors(r1 in -20i32..20, r2 in -20i32..20) {
            // (x - r1)(x - r2)
            let f1 = Polynomial::from_terms('x', [(1, 1), (0, -r1)]).unwrap();
            let f2 = Polynomial::from_terms('x', [(1, 1), (0, -r2)]).unwrap();
            let p = f1.mul(&f2).unwrap();

            let mut expected = vec![i64::from(r1), i64::from(r2)];
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(p.integer_roots(), expected);
        }

        #[test]
        fn reported_roots_evaluate_to_zero(p in small_poly()) {
            for r in p.integer_roots() {
                prop_assert_eq!(p.checked_evaluate(i128::from(r)), Some(0));
            }
        }
    }
}
