use crate::graph::{BipartiteGraph, MetaboliteId, ReactionId, ReactionSet};
use crate::pathways::{EnumerationConfig, enumerate_pathways};
use crate::reachability::guided_bfs;
use std::collections::{BTreeSet, HashSet};

fn met(s: &str) -> MetaboliteId {
    MetaboliteId::new(s)
}
fn rxn(s: &str) -> ReactionId {
    ReactionId::new(s)
}

/// A strictly linear chain `S -[R1]-> M1 -[R2]-> M2`.
#[test]
fn linear_chain_builds_the_expected_reaction_sets() {
    let mut graph = BipartiteGraph::new();
    graph.add_reaction(rxn("R1"), [met("S")], [met("M1")]);
    graph.add_reaction(rxn("R2"), [met("M1")], [met("M2")]);

    let seeds = BTreeSet::from([met("S")]);
    let reach = guided_bfs(&graph, &seeds).unwrap();
    let config = EnumerationConfig::new(2);
    let outcome = enumerate_pathways(&graph, &seeds, &reach, &config).unwrap();

    assert_eq!(
        outcome.table.get(&met("M1"), 1).unwrap(),
        &HashSet::from([ReactionSet::from([rxn("R1")])])
    );
    assert_eq!(
        outcome.table.get(&met("M2"), 2).unwrap(),
        &HashSet::from([ReactionSet::from([rxn("R1"), rxn("R2")])])
    );
}

/// Two independent seed-fed branches merge at a single reaction.
#[test]
fn independent_branches_merge_into_one_reaction_set() {
    let mut graph = BipartiteGraph::new();
    graph.add_reaction(rxn("R1"), [met("S1")], [met("M1")]);
    graph.add_reaction(rxn("R2"), [met("S2")], [met("M2")]);
    graph.add_reaction(rxn("R3"), [met("M1"), met("M2")], [met("M3")]);

    let seeds = BTreeSet::from([met("S1"), met("S2")]);
    let reach = guided_bfs(&graph, &seeds).unwrap();
    let config = EnumerationConfig::new(3);
    let outcome = enumerate_pathways(&graph, &seeds, &reach, &config).unwrap();

    let expected = ReactionSet::from([rxn("R1"), rxn("R2"), rxn("R3")]);
    assert!(outcome.table.get(&met("M3"), 3).unwrap().contains(&expected));
}

/// Two alternate length-1 routes to the same metabolite both survive as distinct
/// reaction-sets.
#[test]
fn alternate_routes_to_the_same_metabolite_both_survive() {
    let mut graph = BipartiteGraph::new();
    graph.add_reaction(rxn("R1"), [met("S")], [met("M")]);
    graph.add_reaction(rxn("R2"), [met("S")], [met("M")]);

    let seeds = BTreeSet::from([met("S")]);
    let reach = guided_bfs(&graph, &seeds).unwrap();
    let config = EnumerationConfig::new(1);
    let outcome = enumerate_pathways(&graph, &seeds, &reach, &config).unwrap();

    let entries = outcome.table.get(&met("M"), 1).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.contains(&ReactionSet::from([rxn("R1")])));
    assert!(entries.contains(&ReactionSet::from([rxn("R2")])));
}

/// Both alternate length-1 routes to `a` propagate independently through a downstream
/// reaction, so `T[t][2]` ends up with two distinct entries, one per alternate.
#[test]
fn alternate_routes_propagate_independently_through_a_downstream_reaction() {
    let mut graph = BipartiteGraph::new();
    graph.add_reaction(rxn("R1"), [met("s")], [met("a")]);
    graph.add_reaction(rxn("R2"), [met("s")], [met("a")]);
    graph.add_reaction(rxn("R3"), [met("a")], [met("t")]);

    let seeds = BTreeSet::from([met("s")]);
    let reach = guided_bfs(&graph, &seeds).unwrap();
    let config = EnumerationConfig::new(2);
    let outcome = enumerate_pathways(&graph, &seeds, &reach, &config).unwrap();

    let entries = outcome.table.get(&met("t"), 2).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.contains(&ReactionSet::from([rxn("R1"), rxn("R3")])));
    assert!(entries.contains(&ReactionSet::from([rxn("R2"), rxn("R3")])));
}

/// `M1 <-> M2` form a genuine cycle (`R2: M1 -> M2`, `R3: M2 -> M1`). The length-3
/// route to `M1` through `{R1, R2, R3}` depends on `M1` itself via `R2`'s reactant, so it must
/// land in `cyclic` and never in `table`.
#[test]
fn self_dependent_reaction_set_is_classified_cyclic() {
    let mut graph = BipartiteGraph::new();
    graph.add_reaction(rxn("R1"), [met("S")], [met("M1")]);
    graph.add_reaction(rxn("R2"), [met("M1")], [met("M2")]);
    graph.add_reaction(rxn("R3"), [met("M2")], [met("M1")]);

    let seeds = BTreeSet::from([met("S")]);
    let reach = guided_bfs(&graph, &seeds).unwrap();
    let config = EnumerationConfig::new(3);
    let outcome = enumerate_pathways(&graph, &seeds, &reach, &config).unwrap();

    let cyclic_set = ReactionSet::from([rxn("R1"), rxn("R2"), rxn("R3")]);
    assert!(outcome.cyclic.get(&met("M1"), 3).unwrap().contains(&cyclic_set));
    assert!(
        !outcome
            .table
            .get(&met("M1"), 3)
            .is_some_and(|sets| sets.contains(&cyclic_set))
    );
}

/// A reaction with 5 non-seed reactants is pruned before the BFS even starts, so it
/// never contributes to the pathway table. The five reactants are themselves ordinary
/// seed-derived metabolites, not seeds, so the high-arity count actually counts them.
#[test]
fn high_arity_reaction_is_pruned_before_bfs() {
    let mut graph = BipartiteGraph::new();
    graph.add_reaction(rxn("Ra"), [met("S")], [met("a")]);
    graph.add_reaction(rxn("Rb"), [met("S")], [met("b")]);
    graph.add_reaction(rxn("Rc"), [met("S")], [met("c")]);
    graph.add_reaction(rxn("Rd"), [met("S")], [met("d")]);
    graph.add_reaction(rxn("Re"), [met("S")], [met("e")]);
    graph.add_reaction(
        rxn("Rbig"),
        [met("a"), met("b"), met("c"), met("d"), met("e")],
        [met("z")],
    );

    let seeds = BTreeSet::from([met("S")]);
    let seed_set: HashSet<MetaboliteId> = seeds.iter().cloned().collect();
    graph.prune_high_arity_reactions(&seed_set);

    let reach = guided_bfs(&graph, &seeds).unwrap();
    assert!(!graph.contains_reaction(&rxn("Rbig")));
    assert!(!reach.visited_reactions.contains(&rxn("Rbig")));
    assert!(!reach.scope.contains(&met("z")));
}

/// Every reaction-set stored under length `k` must itself contain at least `k` reactions: a
/// shorter precursor route can never be filed under a longer column.
#[test]
fn acyclic_entries_never_fall_below_their_column_length() {
    let mut graph = BipartiteGraph::new();
    graph.add_reaction(rxn("R1"), [met("S")], [met("M1")]);
    graph.add_reaction(rxn("R2"), [met("M1")], [met("M2")]);
    graph.add_reaction(rxn("R3"), [met("M1"), met("M2")], [met("M3")]);

    let seeds = BTreeSet::from([met("S")]);
    let reach = guided_bfs(&graph, &seeds).unwrap();
    let config = EnumerationConfig::new(3);
    let outcome = enumerate_pathways(&graph, &seeds, &reach, &config).unwrap();

    for ((_, length), sets) in outcome.table.iter() {
        for set in sets {
            assert!(set.len() >= *length);
        }
    }
}
