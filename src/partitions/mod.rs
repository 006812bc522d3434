//! The integer-partition generator used by the pathway enumerator to distribute a fixed
//! total length across the reactions consumed by a DP column.
//!
//! Given a target sum, one lower bound per component, and a single shared upper bound, this
//! module enumerates every tuple whose components sit inside `[lower_bounds[i], upper]` and
//! whose components sum to exactly `target`. The search is a plain odometer over the
//! Cartesian product of the per-component ranges, filtered down to the tuples that hit the
//! target sum — nothing here is clever, the enumerator calls it once per DP cell and the
//! tuples involved are small.

use cancel_this::{Cancellable, is_cancelled};
use computation_process::{Completable, Generator, GeneratorStep, Incomplete::Suspended};

/// A single requested partition search: `target = sum(tuple)`, `tuple[i] >= lower_bounds[i]`,
/// `tuple[i] <= upper` for every component.
#[derive(Debug, Clone)]
pub struct PartitionQuery {
    target: i64,
    lower_bounds: Vec<u32>,
    upper: u32,
}

impl PartitionQuery {
    pub fn new(target: i64, lower_bounds: impl Into<Vec<u32>>, upper: u32) -> Self {
        PartitionQuery {
            target,
            lower_bounds: lower_bounds.into(),
            upper,
        }
    }
}

/// Odometer position over the per-component ranges `[lower_bounds[i], upper]`.
///
/// `counters[i]` is the current value of component `i`; `done` is set once the odometer has
/// rolled over past the most significant component.
pub struct OdometerState {
    counters: Vec<u32>,
    done: bool,
}

impl From<&PartitionQuery> for OdometerState {
    fn from(query: &PartitionQuery) -> Self {
        // An empty component range makes the odometer immediately exhausted; no tuple can
        // satisfy it. With zero components there is exactly one (empty) tuple to emit, so the
        // odometer starts non-exhausted and `advance` retires it on the very next call.
        let exhausted = query
            .lower_bounds
            .iter()
            .any(|&lb| lb > query.upper);
        OdometerState {
            counters: query.lower_bounds.clone(),
            done: exhausted,
        }
    }
}

impl OdometerState {
    /// Advance to the next position in the Cartesian product, carrying from the least
    /// significant component. Sets `done` once the most significant component overflows.
    fn advance(&mut self, query: &PartitionQuery) {
        for i in (0..self.counters.len()).rev() {
            if self.counters[i] < query.upper {
                self.counters[i] += 1;
                return;
            }
            self.counters[i] = query.lower_bounds[i];
        }
        self.done = true;
    }
}

/// Emits one partition tuple per [`GeneratorStep::step`] call that matches the target sum, and
/// advances the odometer through non-matching positions internally as `Suspended` steps.
pub struct PartitionStep;

impl GeneratorStep<PartitionQuery, OdometerState, Vec<u32>> for PartitionStep {
    fn step(
        context: &PartitionQuery,
        state: &mut OdometerState,
    ) -> Completable<Option<Vec<u32>>> {
        is_cancelled!()?;

        if state.done {
            return Ok(None);
        }

        let candidate = state.counters.clone();
        state.advance(context);

        let sum: i64 = candidate.iter().map(|&v| v as i64).sum();
        if sum == context.target {
            Ok(Some(candidate))
        } else {
            Err(Suspended)
        }
    }
}

/// The generator type used to drive [`PartitionStep`] to completion.
pub type PartitionGenerator = Generator<PartitionQuery, OdometerState, Vec<u32>, PartitionStep>;

/// Enumerate every tuple `(v_0, ..., v_{n-1})` with `v_i` in `[lower_bounds[i], upper]` summing
/// to exactly `target`.
///
/// Returns the tuples in odometer order (least-significant component varies fastest). Callers
/// in the enumerator only care about the resulting set of reaction counts per metabolite, so
/// order is not otherwise significant.
pub fn partitions(target: i64, lower_bounds: &[u32], upper: u32) -> Cancellable<Vec<Vec<u32>>> {
    let query = PartitionQuery::new(target, lower_bounds.to_vec(), upper);
    let state = OdometerState::from(&query);
    let generator = PartitionGenerator::configure(query, state);

    let mut results = Vec::new();
    for item in generator {
        results.push(item?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_component_matches_target_exactly() {
        let result = partitions(4, &[1], 10).unwrap();
        assert_eq!(result, vec![vec![4]]);
    }

    #[test]
    fn two_components_respect_lower_bounds_and_upper() {
        // Sigma t[i] = target = 7, t[0] >= 4, t[1] >= 3, both <= 8.
        let result = partitions(7, &[4, 3], 8).unwrap();
        assert_eq!(result, vec![vec![4, 3]]);
    }

    #[test]
    fn three_components_enumerates_every_valid_tuple() {
        // Sigma t[i] = target = 4, t[0] >= 2, t[1] >= 1, t[2] >= 1, all <= 5.
        let mut result = partitions(4, &[2, 1, 1], 5).unwrap();
        result.sort();
        assert_eq!(result, vec![vec![2, 1, 1]]);
    }

    #[test]
    fn no_tuple_reaches_target_below_sum_of_lower_bounds() {
        let result = partitions(2, &[2, 2], 5).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn empty_lower_bounds_only_matches_zero_target() {
        assert_eq!(partitions(0, &[], 5).unwrap(), vec![Vec::<u32>::new()]);
        assert!(partitions(1, &[], 5).unwrap().is_empty());
    }

    #[test]
    fn inverted_bounds_yield_nothing() {
        let result = partitions(10, &[6], 5).unwrap();
        assert!(result.is_empty());
    }
}
