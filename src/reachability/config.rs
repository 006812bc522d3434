use crate::graph::{BipartiteGraph, MetaboliteId};
use std::collections::BTreeSet;

/// A "flat" configuration object for the guided BFS.
#[derive(Clone)]
pub struct ReachabilityConfig {
    /// The bipartite graph to traverse. Callers that have already pruned high-arity reactions
    /// should do so before constructing this config; the BFS itself does not mutate the graph.
    pub graph: BipartiteGraph,
    /// The seed metabolite set `S`.
    pub seeds: BTreeSet<MetaboliteId>,
}

impl ReachabilityConfig {
    pub fn new(graph: BipartiteGraph, seeds: BTreeSet<MetaboliteId>) -> Self {
        ReachabilityConfig { graph, seeds }
    }
}
