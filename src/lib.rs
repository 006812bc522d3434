//! Branched biosynthetic pathway enumeration over bipartite metabolic reaction networks.
//!
//! This crate finds every distinct, bounded-length branched pathway that produces each
//! metabolite reachable from a seed set, given a bipartite metabolite/reaction graph.
//!
//! # Main Modules
//!
//! - [`graph`]: the bipartite metabolite/reaction graph and its pre-enumeration pruning pass
//! - [`reachability`]: guided BFS computing per-metabolite lower bounds and scope
//! - [`partitions`]: the integer-partition generator the enumerator queries densely
//! - [`pathways`]: the dynamic-programming pathway table, enumerator, and cycle classifier
//!
//! # Quick Start
//!
//! ```no_run
//! use metabolic_pathways::find_pathways;
//! use metabolic_pathways::graph::{BipartiteGraph, MetaboliteId, ReactionId};
//! use std::collections::BTreeSet;
//!
//! let mut graph = BipartiteGraph::new();
//! graph.add_reaction(ReactionId::new("R1"), [MetaboliteId::new("S")], [MetaboliteId::new("M1")]);
//!
//! let seeds = BTreeSet::from([MetaboliteId::new("S")]);
//! let outcome = find_pathways(&graph, &seeds, 2, None).unwrap();
//! println!("found {} acyclic pathway entries", outcome.table.len());
//! ```

pub mod error;
pub mod graph;
pub mod partitions;
pub mod pathways;
pub mod reachability;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{PathwayError, PathwayResult};
pub use pathways::PathwayOutcome;

use graph::{BipartiteGraph, MetaboliteId};
use pathways::EnumerationConfig;
use std::collections::{BTreeSet, HashSet};

/// Run the full pipeline: prune high-arity reactions, compute reachability, then enumerate
/// pathways up to `cutoff`.
///
/// `graph` is cloned before pruning; the caller's graph is left untouched, and the seed set is
/// taken as already merged — callers own the input, the core never mutates it in place.
pub fn find_pathways(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
    cutoff: usize,
    maxnumpath: Option<usize>,
) -> PathwayResult<PathwayOutcome> {
    if cutoff == 0 {
        return Err(PathwayError::InvalidCutoff {
            cutoff: cutoff as i64,
        });
    }

    let mut working_graph = graph.clone();
    let seed_set: HashSet<MetaboliteId> = seeds.iter().cloned().collect();
    working_graph.prune_high_arity_reactions(&seed_set);

    log::info!(
        "pruned graph has {} reaction(s); computing guided BFS from {} seed(s)",
        working_graph.reactions().count(),
        seeds.len()
    );

    let reachability = reachability::guided_bfs(&working_graph, seeds)?;
    log::info!(
        "guided BFS scope contains {} metabolite(s), {} reaction(s) visited",
        reachability.scope.len(),
        reachability.visited_reactions.len()
    );

    let mut config = EnumerationConfig::new(cutoff);
    if let Some(maxnumpath) = maxnumpath {
        config = config.with_maxnumpath(maxnumpath);
    }

    let outcome = pathways::enumerate_pathways(&working_graph, seeds, &reachability, &config)?;
    log::info!(
        "enumeration finished: {} acyclic entries, {} cyclic entries",
        outcome.table.len(),
        outcome.cyclic.len()
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph::ReactionId;

    #[test]
    fn zero_cutoff_is_rejected() {
        let graph = BipartiteGraph::new();
        let seeds = BTreeSet::new();
        let err = find_pathways(&graph, &seeds, 0, None).unwrap_err();
        assert_eq!(err, PathwayError::InvalidCutoff { cutoff: 0 });
    }

    #[test]
    fn end_to_end_linear_chain() {
        let mut graph = BipartiteGraph::new();
        graph.add_reaction(
            ReactionId::new("R1"),
            [MetaboliteId::new("S")],
            [MetaboliteId::new("M1")],
        );
        graph.add_reaction(
            ReactionId::new("R2"),
            [MetaboliteId::new("M1")],
            [MetaboliteId::new("M2")],
        );

        let seeds = BTreeSet::from([MetaboliteId::new("S")]);
        let outcome = find_pathways(&graph, &seeds, 2, None).unwrap();

        assert!(outcome.table.contains_key(&MetaboliteId::new("M1"), 1));
        assert!(outcome.table.contains_key(&MetaboliteId::new("M2"), 2));
    }
}
