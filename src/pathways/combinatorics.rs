//! Small, self-contained combinatorics helpers used by the enumerator: subset choice for the
//! first-round branch and the Cartesian-product assembly step. Arities here are the number of
//! non-seed reactants of a single reaction, which stay small because high-arity reactions are
//! pruned before enumeration starts — a hand-rolled recursive implementation is clearer than
//! pulling in a combinatorics crate for inputs this size.

/// Every subset of `items` with exactly `size` elements, preserving `items`' relative order.
pub fn combinations<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return vec![Vec::new()];
    }
    if items.len() < size {
        return Vec::new();
    }

    let mut result = Vec::new();
    for i in 0..=(items.len() - size) {
        for mut rest in combinations(&items[i + 1..], size - 1) {
            rest.insert(0, items[i].clone());
            result.push(rest);
        }
    }
    result
}

/// The Cartesian product of a list of slots, each slot a collection of candidate items. Every
/// combination picks exactly one item per slot.
pub fn cartesian_product<T: Clone>(slots: &[Vec<T>]) -> Vec<Vec<T>> {
    let mut result: Vec<Vec<T>> = vec![Vec::new()];
    for slot in slots {
        let mut next = Vec::with_capacity(result.len() * slot.len().max(1));
        for prefix in &result {
            for item in slot {
                let mut combo = prefix.clone();
                combo.push(item.clone());
                next.push(combo);
            }
        }
        result = next;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_of_size_zero_is_the_empty_subset() {
        assert_eq!(combinations(&[1, 2, 3], 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn combinations_enumerates_all_subsets_of_the_given_size() {
        let mut result = combinations(&[1, 2, 3], 2);
        result.sort();
        assert_eq!(result, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
    }

    #[test]
    fn combinations_larger_than_input_is_empty() {
        assert!(combinations(&[1, 2], 3).is_empty());
    }

    #[test]
    fn cartesian_product_of_two_slots() {
        let mut result = cartesian_product(&[vec![1, 2], vec![10, 20]]);
        result.sort();
        assert_eq!(result, vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]);
    }

    #[test]
    fn cartesian_product_with_empty_slot_is_empty() {
        let empty: Vec<Vec<i32>> = Vec::new();
        let result = cartesian_product(&[vec![1, 2], empty]);
        assert!(result.is_empty());
    }
}
