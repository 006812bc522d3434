//! Shared test fixtures: a tiny graph builder and logger initialization, used across the
//! crate's `#[cfg(test)]` modules.

use crate::graph::{BipartiteGraph, MetaboliteId, ReactionId};

/// Initialize `env_logger` for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

pub fn met(id: &str) -> MetaboliteId {
    MetaboliteId::new(id)
}

pub fn rxn(id: &str) -> ReactionId {
    ReactionId::new(id)
}

/// Build a graph from a list of `(reaction, reactants, products)` triples.
pub fn graph_from_reactions(
    reactions: impl IntoIterator<Item = (&'static str, Vec<&'static str>, Vec<&'static str>)>,
) -> BipartiteGraph {
    let mut graph = BipartiteGraph::new();
    for (reaction, reactants, products) in reactions {
        graph.add_reaction(
            rxn(reaction),
            reactants.into_iter().map(met),
            products.into_iter().map(met),
        );
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_graph_from_reaction_triples() {
        init_logger();
        let graph = graph_from_reactions([("R1", vec!["S"], vec!["M1"])]);
        assert!(graph.contains_reaction(&rxn("R1")));
        assert_eq!(
            graph.reaction_reactants(&rxn("R1")),
            &std::collections::BTreeSet::from([met("S")])
        );
    }
}
