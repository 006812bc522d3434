//! Guided breadth-first reachability: computes, for every metabolite reachable from a
//! seed set, the minimum number of reaction-layers needed to produce it, plus the full scope
//! of producible metabolites and the set of reactions visited along the way.
//!
//! # Example
//!
//! ```no_run
//! use metabolic_pathways::graph::BipartiteGraph;
//! use metabolic_pathways::reachability::guided_bfs;
//! use std::collections::BTreeSet;
//!
//! let graph = BipartiteGraph::new();
//! let seeds = BTreeSet::new();
//! let outcome = guided_bfs(&graph, &seeds).unwrap();
//! println!("scope has {} metabolites", outcome.scope.len());
//! ```

mod config;
mod state;
mod step;

pub use config::ReachabilityConfig;
pub use state::{ReachabilityOutcome, ReachabilityState};
pub use step::GuidedBfsStep;

use crate::graph::{BipartiteGraph, MetaboliteId};
use cancel_this::Cancellable;
use computation_process::{Computable, Computation};
use std::collections::BTreeSet;

/// The [`Computation`] type driving [`GuidedBfsStep`] to completion.
pub type ReachabilityComputation =
    Computation<ReachabilityConfig, ReachabilityState, ReachabilityOutcome, GuidedBfsStep>;

/// Run the guided BFS from `seeds` over `graph` to completion.
///
/// This is the entry point the pathway enumerator calls before it can populate any DP
/// column — see the control flow described for `find_pathways`.
pub fn guided_bfs(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
) -> Cancellable<ReachabilityOutcome> {
    let config = ReachabilityConfig::new(graph.clone(), seeds.clone());
    let state = ReachabilityState::from(&config);
    let computation = ReachabilityComputation::configure(config, state);
    computation.compute()
}
