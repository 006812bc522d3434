use crate::graph::{BipartiteGraph, MetaboliteId, ReactionId, ReactionSet};
use crate::pathways::combinatorics::cartesian_product;
use crate::pathways::table::PathwayTable;
use cancel_this::{Cancellable, is_cancelled};
use std::collections::BTreeSet;

/// Combine candidate reaction-sets drawn from `slots` (one collection per precursor plus the
/// trailing `{r}` singleton) into every possible pathway-set, then classify each one as cyclic
/// or acyclic before inserting it into `table`/`cyclic`.
///
/// `k` is the DP column currently being filled; a union is only inserted into `table` once it
/// reaches at least that length (it may be shorter when sub-pathways happen to overlap).
pub fn assemble(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
    reaction: &ReactionId,
    k: usize,
    slots: &[Vec<ReactionSet>],
    table: &mut PathwayTable,
    cyclic: &mut PathwayTable,
) -> Cancellable<()> {
    for combo in cartesian_product(slots) {
        is_cancelled!()?;

        let mut union: ReactionSet = ReactionSet::new();
        for set in &combo {
            union.extend(set.iter().cloned());
        }
        let len = union.len();

        let cyc_candidates: BTreeSet<MetaboliteId> = union
            .iter()
            .flat_map(|u| graph.reaction_reactants(u).iter())
            .filter(|m| !seeds.contains(*m))
            .cloned()
            .collect();

        for product in graph.reaction_products(reaction) {
            if seeds.contains(product) {
                continue;
            }
            if cyc_candidates.contains(product) {
                cyclic.insert(product.clone(), len, union.clone());
            } else if len >= k {
                table.insert(product.clone(), len, union.clone());
            }
        }
    }
    Ok(())
}
