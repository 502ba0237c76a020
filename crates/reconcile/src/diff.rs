//! Set difference under a caller-supplied equality predicate

/// Elements of `set_a` that have no match in `set_b`.
///
/// `is_equal` is called as `is_equal(b, a)` with `b` from `set_b` and `a`
/// from `set_a`. The scan is quadratic, which is fine for the small nested
/// blocks this is used on, and lets callers compare by any subset of fields.
/// The order of `set_a` is preserved.
pub fn difference<E, F>(set_a: &[E], set_b: &[E], is_equal: F) -> Vec<E>
where
    E: Clone,
    F: Fn(&E, &E) -> bool,
{
    set_a
        .iter()
        .filter(|element| !contains(set_b, *element, &is_equal))
        .cloned()
        .collect()
}

/// Check whether any element of `set` equals `element`
pub fn contains<E, F>(set: &[E], element: &E, is_equal: F) -> bool
where
    F: Fn(&E, &E) -> bool,
{
    set.iter().any(|candidate| is_equal(candidate, element))
}

/// Build a predicate that compares elements by a projected key.
///
/// Useful when only an identifier matters, e.g. `same_key(|r: &Role| r.name.clone())`.
pub fn same_key<E, K, P>(key: P) -> impl Fn(&E, &E) -> bool
where
    K: PartialEq,
    P: Fn(&E) -> K,
{
    move |a, b| key(a) == key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: &i32, b: &i32) -> bool {
        a == b
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Role {
        name: String,
        description: String,
    }

    fn role(name: &str, description: &str) -> Role {
        Role {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_empty_set_a() {
        assert!(difference(&[], &[1, 2, 3], eq).is_empty());
        assert!(difference::<i32, _>(&[], &[], eq).is_empty());
    }

    #[test]
    fn test_removes_matches() {
        assert_eq!(difference(&[1, 2, 3], &[2], eq), vec![1, 3]);
    }

    #[test]
    fn test_empty_set_b_keeps_order() {
        assert_eq!(difference(&[3, 1, 2], &[], eq), vec![3, 1, 2]);
    }

    #[test]
    fn test_always_equal_predicate() {
        assert!(difference(&[1, 2, 3], &[99], |_, _| true).is_empty());
        assert_eq!(difference(&[1, 2, 3], &[], |_, _| true), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_b_order_irrelevant() {
        let a = [1, 2, 3, 4];
        assert_eq!(difference(&a, &[4, 2], eq), difference(&a, &[2, 4], eq));
    }

    #[test]
    fn test_duplicates_in_set_a_are_kept() {
        assert_eq!(difference(&[1, 1, 2], &[2], eq), vec![1, 1]);
    }

    #[test]
    fn test_predicate_argument_order() {
        // b comes first, a second
        let calls = std::cell::RefCell::new(Vec::new());
        let _ = difference(&[1], &[10], |b: &i32, a: &i32| {
            calls.borrow_mut().push((*b, *a));
            false
        });
        assert_eq!(calls.into_inner(), vec![(10, 1)]);
    }

    #[test]
    fn test_partial_key_equality() {
        let desired = [role("admin", "new text"), role("viewer", "")];
        let current = [role("admin", "old text")];
        let by_name = same_key(|r: &Role| r.name.clone());

        let added = difference(&desired, &current, &by_name);
        assert_eq!(added, vec![role("viewer", "")]);
    }

    #[test]
    fn test_contains() {
        assert!(contains(&[1, 2, 3], &2, eq));
        assert!(!contains(&[1, 2, 3], &5, eq));
        assert!(!contains(&[], &5, eq));
    }
}
