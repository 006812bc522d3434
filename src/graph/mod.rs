//! The bipartite metabolite/reaction graph that the rest of the crate operates on.
//!
//! A [`BipartiteGraph`] has two disjoint node classes — metabolites and reactions — and every
//! edge crosses classes: metabolite → reaction (a reactant edge) or reaction → metabolite (a
//! product edge). The external model loader and graph assembler described in the crate's
//! design notes are responsible for producing one of these from a stoichiometric model; this
//! module only owns the graph itself and the single structural transform the core performs on
//! it before reachability analysis (see [`BipartiteGraph::prune_high_arity_reactions`]).

mod identifiers;

pub use identifiers::{MetaboliteId, ReactionId, ReactionSet};

use std::collections::{BTreeSet, HashMap, HashSet};

/// The class tag carried by every node in a [`BipartiteGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    Metabolite,
    Reaction,
}

/// A reference to a node of either class, used by the generic graph accessors
/// (`predecessors(n)`, `successors(n)`, `nodes_of_class(c)`, `remove_node(n)`).
///
/// Algorithm code internal to this crate prefers the strongly-typed per-class accessors below
/// ([`BipartiteGraph::reaction_reactants`] and friends); `NodeRef` exists so that external
/// callers working generically over the graph are not forced to know in advance which class a
/// given identifier belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Metabolite(MetaboliteId),
    Reaction(ReactionId),
}

/// Reactions with 5 or more non-seed reactants are excluded before reachability analysis even
/// starts — see `BipartiteGraph::prune_high_arity_reactions`.
pub const HIGH_ARITY_THRESHOLD: usize = 5;

/// A directed bipartite graph of metabolites and reactions.
///
/// Internally the graph is stored as four adjacency maps rather than one generic node/edge
/// list, because every traversal in this crate needs either "reactants of a reaction" or
/// "reactions that produce/consume a metabolite" and never needs to treat the two node
/// classes uniformly in a hot loop.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BipartiteGraph {
    /// reaction -> its reactant metabolites (predecessors of the reaction)
    reactants: HashMap<ReactionId, BTreeSet<MetaboliteId>>,
    /// reaction -> its product metabolites (successors of the reaction)
    products: HashMap<ReactionId, BTreeSet<MetaboliteId>>,
    /// metabolite -> reactions that produce it (predecessors of the metabolite)
    produced_by: HashMap<MetaboliteId, BTreeSet<ReactionId>>,
    /// metabolite -> reactions that consume it (successors of the metabolite)
    consumed_by: HashMap<MetaboliteId, BTreeSet<ReactionId>>,
}

impl BipartiteGraph {
    pub fn new() -> Self {
        BipartiteGraph::default()
    }

    /// Register a reaction with the given reactant and product metabolites.
    ///
    /// Calling this twice for the same `reaction` replaces its reactants/products (and fixes
    /// up the metabolite-indexed maps accordingly); this mirrors how an external graph
    /// assembler would incrementally build up the network from a stream of reaction records.
    pub fn add_reaction(
        &mut self,
        reaction: ReactionId,
        reactants: impl IntoIterator<Item = MetaboliteId>,
        products: impl IntoIterator<Item = MetaboliteId>,
    ) {
        self.remove_reaction(&reaction);

        let reactants: BTreeSet<MetaboliteId> = reactants.into_iter().collect();
        let products: BTreeSet<MetaboliteId> = products.into_iter().collect();

        for m in &reactants {
            self.consumed_by
                .entry(m.clone())
                .or_default()
                .insert(reaction.clone());
        }
        for m in &products {
            self.produced_by
                .entry(m.clone())
                .or_default()
                .insert(reaction.clone());
        }

        self.reactants.insert(reaction.clone(), reactants);
        self.products.insert(reaction, products);
    }

    /// The reactant metabolites of a reaction (empty if the reaction is unknown).
    pub fn reaction_reactants(&self, reaction: &ReactionId) -> &BTreeSet<MetaboliteId> {
        static EMPTY: BTreeSet<MetaboliteId> = BTreeSet::new();
        self.reactants.get(reaction).unwrap_or(&EMPTY)
    }

    /// The product metabolites of a reaction (empty if the reaction is unknown).
    pub fn reaction_products(&self, reaction: &ReactionId) -> &BTreeSet<MetaboliteId> {
        static EMPTY: BTreeSet<MetaboliteId> = BTreeSet::new();
        self.products.get(reaction).unwrap_or(&EMPTY)
    }

    /// Reactions that produce `metabolite` (its predecessors).
    pub fn metabolite_producers(&self, metabolite: &MetaboliteId) -> &BTreeSet<ReactionId> {
        static EMPTY: BTreeSet<ReactionId> = BTreeSet::new();
        self.produced_by.get(metabolite).unwrap_or(&EMPTY)
    }

    /// Reactions that consume `metabolite` (its successors).
    pub fn metabolite_consumers(&self, metabolite: &MetaboliteId) -> &BTreeSet<ReactionId> {
        static EMPTY: BTreeSet<ReactionId> = BTreeSet::new();
        self.consumed_by.get(metabolite).unwrap_or(&EMPTY)
    }

    pub fn reactions(&self) -> impl Iterator<Item = &ReactionId> {
        self.reactants.keys()
    }

    pub fn contains_reaction(&self, reaction: &ReactionId) -> bool {
        self.reactants.contains_key(reaction)
    }

    pub fn contains_metabolite(&self, metabolite: &MetaboliteId) -> bool {
        self.produced_by.contains_key(metabolite) || self.consumed_by.contains_key(metabolite)
    }

    /// All node identifiers of the given class, per the `nodes_of_class` entry of the external
    /// interface.
    pub fn nodes_of_class(&self, class: NodeClass) -> Vec<NodeRef> {
        match class {
            NodeClass::Reaction => self
                .reactants
                .keys()
                .cloned()
                .map(NodeRef::Reaction)
                .collect(),
            NodeClass::Metabolite => {
                let mut mets: HashSet<MetaboliteId> = HashSet::new();
                mets.extend(self.produced_by.keys().cloned());
                mets.extend(self.consumed_by.keys().cloned());
                mets.into_iter().map(NodeRef::Metabolite).collect()
            }
        }
    }

    /// The generic predecessor accessor from the external interface.
    pub fn predecessors(&self, node: &NodeRef) -> Vec<NodeRef> {
        match node {
            NodeRef::Reaction(r) => self
                .reaction_reactants(r)
                .iter()
                .cloned()
                .map(NodeRef::Metabolite)
                .collect(),
            NodeRef::Metabolite(m) => self
                .metabolite_producers(m)
                .iter()
                .cloned()
                .map(NodeRef::Reaction)
                .collect(),
        }
    }

    /// The generic successor accessor from the external interface.
    pub fn successors(&self, node: &NodeRef) -> Vec<NodeRef> {
        match node {
            NodeRef::Reaction(r) => self
                .reaction_products(r)
                .iter()
                .cloned()
                .map(NodeRef::Metabolite)
                .collect(),
            NodeRef::Metabolite(m) => self
                .metabolite_consumers(m)
                .iter()
                .cloned()
                .map(NodeRef::Reaction)
                .collect(),
        }
    }

    /// Remove a reaction node and all of its incident edges.
    pub fn remove_reaction(&mut self, reaction: &ReactionId) {
        if let Some(reactants) = self.reactants.remove(reaction) {
            for m in reactants {
                if let Some(set) = self.consumed_by.get_mut(&m) {
                    set.remove(reaction);
                }
            }
        }
        if let Some(products) = self.products.remove(reaction) {
            for m in products {
                if let Some(set) = self.produced_by.get_mut(&m) {
                    set.remove(reaction);
                }
            }
        }
    }

    /// Remove a metabolite node. Any reaction that reactant/produces solely through this
    /// metabolite keeps its other edges; the metabolite simply stops appearing as a
    /// predecessor/successor anywhere.
    pub fn remove_metabolite(&mut self, metabolite: &MetaboliteId) {
        if let Some(consumers) = self.consumed_by.remove(metabolite) {
            for r in consumers {
                if let Some(set) = self.reactants.get_mut(&r) {
                    set.remove(metabolite);
                }
            }
        }
        if let Some(producers) = self.produced_by.remove(metabolite) {
            for r in producers {
                if let Some(set) = self.products.get_mut(&r) {
                    set.remove(metabolite);
                }
            }
        }
    }

    /// Remove a node of either class, per the `remove_node` entry of the external interface.
    pub fn remove_node(&mut self, node: &NodeRef) {
        match node {
            NodeRef::Reaction(r) => self.remove_reaction(r),
            NodeRef::Metabolite(m) => self.remove_metabolite(m),
        }
    }

    /// Remove every reaction whose non-seed reactant count is at or above
    /// [`HIGH_ARITY_THRESHOLD`].
    ///
    /// Combinatorial cost in the enumerator scales with the arity of non-seed reactants;
    /// reactions at or above the threshold are excluded by design policy rather than handled
    /// (however slowly) by the partition generator.
    pub fn prune_high_arity_reactions(&mut self, seeds: &HashSet<MetaboliteId>) {
        let to_remove: Vec<ReactionId> = self
            .reactants
            .iter()
            .filter(|(_, reactants)| {
                reactants.iter().filter(|m| !seeds.contains(*m)).count() >= HIGH_ARITY_THRESHOLD
            })
            .map(|(r, _)| r.clone())
            .collect();

        for reaction in &to_remove {
            log::trace!("pruning high-arity reaction `{reaction}`");
            self.remove_reaction(reaction);
        }

        if !to_remove.is_empty() {
            log::debug!("pruned {} high-arity reaction(s)", to_remove.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn met(s: &str) -> MetaboliteId {
        MetaboliteId::new(s)
    }
    fn rxn(s: &str) -> ReactionId {
        ReactionId::new(s)
    }

    #[test]
    fn add_reaction_indexes_both_directions() {
        let mut g = BipartiteGraph::new();
        g.add_reaction(rxn("R1"), [met("a"), met("b")], [met("c")]);

        assert_eq!(
            g.reaction_reactants(&rxn("R1")),
            &BTreeSet::from([met("a"), met("b")])
        );
        assert_eq!(
            g.reaction_products(&rxn("R1")),
            &BTreeSet::from([met("c")])
        );
        assert_eq!(
            g.metabolite_consumers(&met("a")),
            &BTreeSet::from([rxn("R1")])
        );
        assert_eq!(
            g.metabolite_producers(&met("c")),
            &BTreeSet::from([rxn("R1")])
        );
    }

    #[test]
    fn remove_reaction_clears_incident_edges() {
        let mut g = BipartiteGraph::new();
        g.add_reaction(rxn("R1"), [met("a")], [met("b")]);
        g.remove_reaction(&rxn("R1"));

        assert!(!g.contains_reaction(&rxn("R1")));
        assert!(g.metabolite_consumers(&met("a")).is_empty());
        assert!(g.metabolite_producers(&met("b")).is_empty());
    }

    #[test]
    fn prune_removes_only_high_arity_non_seed_reactions() {
        let mut g = BipartiteGraph::new();
        // 5 non-seed reactants: pruned.
        g.add_reaction(
            rxn("Rbig"),
            [met("a"), met("b"), met("c"), met("d"), met("e")],
            [met("z")],
        );
        // 4 non-seed reactants + 1 seed reactant: not pruned (seed reactants don't count).
        g.add_reaction(
            rxn("Rok"),
            [met("a"), met("b"), met("c"), met("d"), met("seed")],
            [met("y")],
        );
        let seeds = HashSet::from([met("seed")]);
        g.prune_high_arity_reactions(&seeds);

        assert!(!g.contains_reaction(&rxn("Rbig")));
        assert!(g.contains_reaction(&rxn("Rok")));
    }

    #[test]
    fn generic_accessors_match_typed_ones() {
        let mut g = BipartiteGraph::new();
        g.add_reaction(rxn("R1"), [met("a")], [met("b")]);

        let preds = g.predecessors(&NodeRef::Reaction(rxn("R1")));
        assert_eq!(preds, vec![NodeRef::Metabolite(met("a"))]);

        let succs = g.successors(&NodeRef::Metabolite(met("a")));
        assert_eq!(succs, vec![NodeRef::Reaction(rxn("R1"))]);
    }
}
