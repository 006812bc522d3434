use crate::graph::{MetaboliteId, ReactionId};
use crate::reachability::ReachabilityConfig;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Mutable state threaded through the guided BFS.
///
/// `lower_bound_metabolite`/`lower_bound_reaction` only ever remember the *first* (i.e.
/// smallest) stage at which a node was reached — later re-confirmations at larger stages carry
/// no information callers need to observe.
pub struct ReachabilityState {
    pub(crate) stage: usize,
    pub(crate) initialized: bool,
    pub(crate) scope: BTreeSet<MetaboliteId>,
    pub(crate) lower_bound_metabolite: HashMap<MetaboliteId, usize>,
    pub(crate) lower_bound_reaction: HashMap<ReactionId, usize>,
    pub(crate) visited: HashSet<ReactionId>,
    pub(crate) queue: VecDeque<ReactionId>,
    pub(crate) queued: HashSet<ReactionId>,
}

impl From<&ReachabilityConfig> for ReachabilityState {
    fn from(config: &ReachabilityConfig) -> Self {
        let lower_bound_metabolite = config.seeds.iter().map(|s| (s.clone(), 0)).collect();
        ReachabilityState {
            stage: 0,
            initialized: false,
            scope: config.seeds.clone(),
            lower_bound_metabolite,
            lower_bound_reaction: HashMap::new(),
            visited: HashSet::new(),
            queue: VecDeque::new(),
            queued: HashSet::new(),
        }
    }
}

/// The terminal output of the guided BFS: per-metabolite lower bounds, the set of visited
/// reactions, and the scope of everything producible from the seed set.
#[derive(Debug, Clone)]
pub struct ReachabilityOutcome {
    pub lower_bound: HashMap<MetaboliteId, usize>,
    pub visited_reactions: HashSet<ReactionId>,
    pub scope: BTreeSet<MetaboliteId>,
}

impl From<&ReachabilityState> for ReachabilityOutcome {
    fn from(state: &ReachabilityState) -> Self {
        ReachabilityOutcome {
            lower_bound: state.lower_bound_metabolite.clone(),
            visited_reactions: state.visited.clone(),
            scope: state.scope.clone(),
        }
    }
}
