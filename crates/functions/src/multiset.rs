//! Multiset (bag) algebra over ordered sequences.
//!
//! Elements are compared by equality; multiplicity matters for the
//! `all` variants. Output ordering follows the left input's order
//! except for [`union_distinct`], which sorts the distinct union by
//! the element type's natural order so its output is deterministic.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

fn occurrence_counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Removes from `a`, per element, up to as many occurrences as appear
/// in `b`.
pub fn except_all<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut remaining = occurrence_counts(b);
    let mut result = Vec::new();
    for item in a {
        match remaining.get_mut(item) {
            Some(n) if *n > 0 => *n -= 1,
            _ => result.push(item.clone()),
        }
    }
    result
}

/// Distinct elements of `a` absent from `b`, in `a`'s first-occurrence
/// order.
pub fn except_distinct<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let excluded: HashSet<&T> = b.iter().collect();
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in a {
        if !excluded.contains(item) && seen.insert(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Per distinct element, `min(count_a, count_b)` occurrences in `a`'s
/// order.
pub fn intersect_all<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut remaining = occurrence_counts(b);
    let mut result = Vec::new();
    for item in a {
        if let Some(n) = remaining.get_mut(item) {
            if *n > 0 {
                *n -= 1;
                result.push(item.clone());
            }
        }
    }
    result
}

/// Distinct elements present in both inputs, in `a`'s first-occurrence
/// order.
pub fn intersect_distinct<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let present: HashSet<&T> = b.iter().collect();
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in a {
        if present.contains(item) && seen.insert(item) {
            result.push(item.clone());
        }
    }
    result
}

/// `a` followed by `b`, verbatim.
pub fn union_all<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    result.extend_from_slice(a);
    result.extend_from_slice(b);
    result
}

/// The distinct union, sorted by the element type's natural order.
pub fn union_distinct<T: Eq + Hash + Clone + Ord>(a: &[T], b: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in a.iter().chain(b.iter()) {
        if seen.insert(item) {
            result.push(item.clone());
        }
    }
    result.sort();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_except() {
        let abacee = list(&["a", "b", "a", "c", "e", "e"]);
        let addc = list(&["a", "d", "c", "d", "c"]);
        let empty: Vec<String> = Vec::new();

        assert_eq!(except_all(&abacee, &addc), list(&["b", "a", "e", "e"]));
        assert_eq!(except_all(&abacee, &empty), abacee);
        assert_eq!(except_all(&empty, &empty), empty);
        assert_eq!(except_all(&empty, &addc), empty);

        assert_eq!(except_distinct(&abacee, &addc), list(&["b", "e"]));
        assert_eq!(
            except_distinct(&abacee, &empty),
            list(&["a", "b", "c", "e"])
        );
        assert_eq!(except_distinct(&empty, &addc), empty);
    }

    #[test]
    fn test_intersect() {
        let abacee = list(&["a", "b", "a", "c", "e", "e"]);
        let adaa = list(&["a", "d", "a", "a"]);
        let addc = list(&["a", "d", "c", "d", "c"]);
        let empty: Vec<String> = Vec::new();

        assert_eq!(intersect_all(&abacee, &addc), list(&["a", "c"]));
        assert_eq!(intersect_all(&abacee, &adaa), list(&["a", "a"]));
        assert_eq!(intersect_all(&adaa, &abacee), list(&["a", "a"]));
        assert_eq!(intersect_all(&abacee, &empty), empty);

        assert_eq!(intersect_distinct(&abacee, &addc), list(&["a", "c"]));
        assert_eq!(intersect_distinct(&abacee, &adaa), list(&["a"]));
        assert_eq!(intersect_distinct(&adaa, &abacee), list(&["a"]));
        assert_eq!(intersect_distinct(&empty, &addc), empty);
    }

    #[test]
    fn test_union() {
        let abacee = list(&["a", "b", "a", "c", "e", "e"]);
        let addc = list(&["a", "d", "c", "d", "c"]);
        let empty: Vec<String> = Vec::new();

        assert_eq!(
            union_all(&abacee, &addc),
            list(&["a", "b", "a", "c", "e", "e", "a", "d", "c", "d", "c"])
        );
        assert_eq!(union_all(&abacee, &empty), abacee);
        assert_eq!(union_all(&empty, &addc), addc);

        assert_eq!(
            union_distinct(&abacee, &addc),
            list(&["a", "b", "c", "d", "e"])
        );
        assert_eq!(union_distinct(&abacee, &empty), list(&["a", "b", "c", "e"]));
        assert_eq!(union_distinct(&empty, &addc), list(&["a", "c", "d"]));
        assert_eq!(union_distinct(&empty, &empty), empty);
    }
}
