use crate::reachability::{ReachabilityConfig, ReachabilityOutcome, ReachabilityState};
use cancel_this::is_cancelled;
use computation_process::{Completable, ComputationStep, Incomplete::Suspended};
use std::collections::HashSet;

/// Drives one [`ReachabilityState`] through the guided BFS: the first call performs the
/// special-cased stage 1 (reactions whose reactants lie entirely in the seed set), every
/// following call drains exactly one more stage's worth of queued reactions.
pub struct GuidedBfsStep;

impl ComputationStep<ReachabilityConfig, ReachabilityState, ReachabilityOutcome> for GuidedBfsStep {
    fn step(
        context: &ReachabilityConfig,
        state: &mut ReachabilityState,
    ) -> Completable<ReachabilityOutcome> {
        if !state.initialized {
            run_stage_one(context, state)?;
            state.initialized = true;
            state.stage = 1;
        } else {
            run_next_stage(context, state)?;
        }

        if state.queue.is_empty() {
            log::debug!(
                "guided BFS finished at stage {} with scope of {} metabolite(s)",
                state.stage,
                state.scope.len()
            );
            Ok(ReachabilityOutcome::from(&*state))
        } else {
            log::trace!(
                "guided BFS stage {} queued {} reaction(s) for the next stage",
                state.stage,
                state.queue.len()
            );
            Err(Suspended)
        }
    }
}

fn run_stage_one(
    context: &ReachabilityConfig,
    state: &mut ReachabilityState,
) -> Result<(), cancel_this::Cancelled> {
    let mut starting_reactions = HashSet::new();

    for seed in &context.seeds {
        for r in context.graph.metabolite_consumers(seed) {
            if starting_reactions.contains(r) {
                continue;
            }
            is_cancelled!()?;
            let reactants = context.graph.reaction_reactants(r);
            if reactants.iter().all(|m| context.seeds.contains(m)) {
                starting_reactions.insert(r.clone());
                for product in context.graph.reaction_products(r) {
                    state.scope.insert(product.clone());
                    state.lower_bound_metabolite.entry(product.clone()).or_insert(1);
                }
                state.lower_bound_reaction.entry(r.clone()).or_insert(1);
            }
        }
    }

    for r in &starting_reactions {
        for product in context.graph.reaction_products(r).clone() {
            for next in context.graph.metabolite_consumers(&product).clone() {
                is_cancelled!()?;
                let predecessors_satisfied = context
                    .graph
                    .reaction_reactants(&next)
                    .iter()
                    .all(|m| state.scope.contains(m));
                if predecessors_satisfied && !state.queued.contains(&next) {
                    state.queue.push_back(next.clone());
                    state.queued.insert(next);
                }
            }
        }
        state.visited.insert(r.clone());
    }

    Ok(())
}

fn run_next_stage(
    context: &ReachabilityConfig,
    state: &mut ReachabilityState,
) -> Result<(), cancel_this::Cancelled> {
    state.stage += 1;
    let stage = state.stage;
    let batch: Vec<_> = state.queue.drain(..).collect();
    state.queued.clear();

    for r in batch {
        is_cancelled!()?;
        if !state.visited.contains(&r) {
            state.lower_bound_reaction.entry(r.clone()).or_insert(stage);
            for product in context.graph.reaction_products(&r).clone() {
                state.scope.insert(product.clone());
                state
                    .lower_bound_metabolite
                    .entry(product.clone())
                    .or_insert(stage);
                for next in context.graph.metabolite_consumers(&product).clone() {
                    let predecessors_satisfied = context
                        .graph
                        .reaction_reactants(&next)
                        .iter()
                        .all(|m| state.scope.contains(m));
                    if predecessors_satisfied
                        && !state.visited.contains(&next)
                        && !state.queued.contains(&next)
                    {
                        state.queue.push_back(next.clone());
                        state.queued.insert(next);
                    }
                }
            }
            state.visited.insert(r);
        } else {
            for product in context.graph.reaction_products(&r).clone() {
                state
                    .lower_bound_metabolite
                    .entry(product)
                    .or_insert(stage);
            }
        }
    }

    Ok(())
}
