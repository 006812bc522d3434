use crate::graph::{BipartiteGraph, MetaboliteId, ReactionId, ReactionSet};
use crate::partitions::partitions;
use crate::pathways::assemble::assemble;
use crate::pathways::combinatorics::combinations;
use crate::pathways::config::EnumerationConfig;
use crate::pathways::table::PathwayTable;
use crate::reachability::ReachabilityOutcome;
use cancel_this::is_cancelled;
use std::collections::BTreeSet;

/// The result of running the enumerator to completion: the acyclic pathway table, its cyclic
/// counterpart, and the scope carried over from the guided BFS.
#[derive(Debug, Clone)]
pub struct PathwayOutcome {
    pub table: PathwayTable,
    pub cyclic: PathwayTable,
    pub scope: BTreeSet<MetaboliteId>,
}

/// Fill the pathway table column-by-column from length 1 through `config.cutoff`.
///
/// `reachability` must be the outcome of [`crate::reachability::guided_bfs`] run over the same
/// `graph` and `seeds`.
pub fn enumerate_pathways(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
    reachability: &ReachabilityOutcome,
    config: &EnumerationConfig,
) -> cancel_this::Cancellable<PathwayOutcome> {
    let mut table = PathwayTable::new();
    let mut cyclic = PathwayTable::new();

    for s in seeds {
        table.insert(s.clone(), 0, ReactionSet::new());
    }

    fill_column_one(graph, seeds, reachability, &mut table)?;
    log::debug!("column 1 filled with {} entries", table.len());

    for k in 2..=config.cutoff {
        is_cancelled!()?;
        fill_column(graph, seeds, reachability, config, k, &mut table, &mut cyclic)?;
        log::debug!("column {k} filled, table now has {} entries", table.len());
    }

    Ok(PathwayOutcome {
        table,
        cyclic,
        scope: reachability.scope.clone(),
    })
}

fn fill_column_one(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
    reachability: &ReachabilityOutcome,
    table: &mut PathwayTable,
) -> cancel_this::Cancellable<()> {
    for r in &reachability.visited_reactions {
        is_cancelled!()?;
        let reactants = graph.reaction_reactants(r);
        if !reactants.iter().all(|m| seeds.contains(m)) {
            continue;
        }
        for product in graph.reaction_products(r) {
            if seeds.contains(product) {
                continue;
            }
            table.insert(product.clone(), 1, ReactionSet::from([r.clone()]));
        }
    }
    Ok(())
}

fn fill_column(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
    reachability: &ReachabilityOutcome,
    config: &EnumerationConfig,
    k: usize,
    table: &mut PathwayTable,
    cyclic: &mut PathwayTable,
) -> cancel_this::Cancellable<()> {
    for r in &reachability.visited_reactions {
        is_cancelled!()?;

        let m: Vec<MetaboliteId> = graph
            .reaction_reactants(r)
            .iter()
            .filter(|p| !seeds.contains(*p))
            .cloned()
            .collect();
        if m.is_empty() {
            continue;
        }

        let upper_v = (m.len() * (k - 1)) as i64;
        let lower_v = (k - 1) as i64;
        let mut v = lower_v;
        while v <= upper_v {
            is_cancelled!()?;
            if v <= (m.len() * (k - 2)) as i64 {
                first_round(graph, seeds, reachability, config, r, &m, k, v, table, cyclic)?;
            } else {
                second_round(graph, seeds, reachability, config, r, &m, k, v, table, cyclic)?;
            }
            v += 1;
        }
    }
    Ok(())
}

/// The branch used when a subset `A` of non-seed reactants can reuse length-`(k-1)` entries
/// directly, leaving the rest of the reactants (`B`) to absorb the remaining length via a
/// partition search.
#[allow(clippy::too_many_arguments)]
fn first_round(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
    reachability: &ReachabilityOutcome,
    config: &EnumerationConfig,
    reaction: &ReactionId,
    m: &[MetaboliteId],
    k: usize,
    v: i64,
    table: &mut PathwayTable,
    cyclic: &mut PathwayTable,
) -> cancel_this::Cancellable<()> {
    let u = v / (k - 1) as i64;
    for j in 1..=u {
        is_cancelled!()?;
        for a_set in combinations(m, j as usize) {
            let a: BTreeSet<MetaboliteId> = a_set.iter().cloned().collect();
            if a_set.iter().any(|x| !table.contains_key(x, k - 1)) {
                continue;
            }
            let b: Vec<MetaboliteId> = m.iter().filter(|x| !a.contains(*x)).cloned().collect();

            let lower_bounds: Vec<u32> = b
                .iter()
                .map(|x| reachability.lower_bound.get(x).copied().unwrap_or(0) as u32)
                .collect();
            let target = v - j * (k - 1) as i64;
            let tuples = partitions(target, &lower_bounds, (k - 1) as u32)?;

            for tuple in tuples {
                if b.iter()
                    .zip(tuple.iter())
                    .any(|(x, &len)| !table.contains_key(x, len as usize))
                {
                    continue;
                }

                let count: usize = a_set
                    .iter()
                    .map(|x| table.count(x, k - 1))
                    .chain(b.iter().zip(tuple.iter()).map(|(x, &len)| table.count(x, len as usize)))
                    .product();

                let products_known = graph
                    .reaction_products(reaction)
                    .iter()
                    .all(|p| table.has_any_entry(p));
                if count > config.maxnumpath && products_known {
                    continue;
                }

                let mut slots: Vec<Vec<ReactionSet>> = a_set
                    .iter()
                    .map(|x| table.get(x, k - 1).into_iter().flatten().cloned().collect())
                    .collect();
                slots.extend(b.iter().zip(tuple.iter()).map(|(x, &len)| {
                    table.get(x, len as usize).into_iter().flatten().cloned().collect()
                }));
                slots.push(vec![ReactionSet::from([reaction.clone()])]);

                assemble(graph, seeds, reaction, k, &slots, table, cyclic)?;
            }
        }
    }
    Ok(())
}

/// The branch used once every non-seed reactant must absorb some of the remaining length itself
/// — a single partition search over all of `m`, with no subset split.
#[allow(clippy::too_many_arguments)]
fn second_round(
    graph: &BipartiteGraph,
    seeds: &BTreeSet<MetaboliteId>,
    reachability: &ReachabilityOutcome,
    config: &EnumerationConfig,
    reaction: &ReactionId,
    m: &[MetaboliteId],
    k: usize,
    v: i64,
    table: &mut PathwayTable,
    cyclic: &mut PathwayTable,
) -> cancel_this::Cancellable<()> {
    let lower_bounds: Vec<u32> = m
        .iter()
        .map(|x| reachability.lower_bound.get(x).copied().unwrap_or(0) as u32)
        .collect();
    let tuples = partitions(v, &lower_bounds, (k - 1) as u32)?;

    for tuple in tuples {
        is_cancelled!()?;
        if m.iter()
            .zip(tuple.iter())
            .any(|(x, &len)| !table.contains_key(x, len as usize))
        {
            continue;
        }

        let count: usize = m
            .iter()
            .zip(tuple.iter())
            .map(|(x, &len)| table.count(x, len as usize))
            .product();

        let products_known = graph
            .reaction_products(reaction)
            .iter()
            .all(|p| table.has_any_entry(p));
        if count > config.maxnumpath && products_known {
            continue;
        }

        let mut slots: Vec<Vec<ReactionSet>> = m
            .iter()
            .zip(tuple.iter())
            .map(|(x, &len)| table.get(x, len as usize).into_iter().flatten().cloned().collect())
            .collect();
        slots.push(vec![ReactionSet::from([reaction.clone()])]);

        assemble(graph, seeds, reaction, k, &slots, table, cyclic)?;
    }
    Ok(())
}
