//! Property-based tests for the collection and its text store.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::collection::Collection;
    use polybase_poly::Polynomial;

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((0u32..=6, -50i32..50), 0..=4)
            .prop_map(|terms| Polynomial::from_terms('x', terms).unwrap())
    }

    fn constant(k: i32) -> Polynomial {
        Polynomial::from_terms('x', [(0, k)]).unwrap()
    }

    // Constants 1..=n stand in for distinct polynomials so order is visible
    fn labels(c: &Collection) -> Vec<i32> {
        c.iter().map(|p| p.coefficient(0)).collect()
    }

    proptest! {
        #[test]
        fn save_then_load_restores(polys in proptest::collection::vec(small_poly(), 0..8)) {
            let c: Collection = polys.into_iter().collect();
            let mut buf = Vec::new();
            c.save(&mut buf).unwrap();

            let mut restored = Collection::new();
            let report = restored.load(buf.as_slice()).unwrap();
            prop_assert!(report.is_clean());
            prop_assert_eq!(report.loaded, c.len());
            prop_assert_eq!(restored, c);
        }

        #[test]
        fn insert_after_places_next(n in 1i32..10, at in 0usize..10) {
            let mut c: Collection = (1..=n).map(constant).collect();
            let len = c.len();
            let result = c.insert_after(at, constant(100));
            if at < len {
                prop_assert!(result.is_ok());
                let mut expected: Vec<i32> = (1..=n).collect();
                expected.insert(at + 1, 100);
                prop_assert_eq!(labels(&c), expected);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(c.len(), len);
            }
        }

        #[test]
        fn remove_keeps_remaining_order(n in 1i32..10, at in 0usize..10) {
            let mut c: Collection = (1..=n).map(constant).collect();
            let mut expected: Vec<i32> = (1..=n).collect();
            match c.remove(at) {
                Ok(removed) => {
                    prop_assert_eq!(removed.coefficient(0), expected.remove(at));
                }
                Err(_) => prop_assert!(at >= expected.len()),
            }
            prop_assert_eq!(labels(&c), expected);
        }

        #[test]
        fn stored_results_do_not_alias(p in small_poly(), q in small_poly()) {
            let mut c: Collection = vec![p, q.clone()].into_iter().collect();
            let sum = c.add(0, 1).unwrap();
            c.push(sum.clone());
            c.get_mut(0).unwrap().clear();
            prop_assert_eq!(c.get(1).unwrap(), &q);
            prop_assert_eq!(c.get(2).unwrap(), &sum);
        }
    }
}
