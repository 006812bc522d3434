use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use metabolic_pathways::find_pathways;
use metabolic_pathways::graph::{BipartiteGraph, MetaboliteId, ReactionId};
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(name = "metabolic_pathways_cli")]
#[command(about = "Enumerate branched biosynthetic pathways in a metabolic reaction network")]
struct Args {
    /// Path to a JSON graph description (see `GraphDescription`)
    #[arg(value_name = "FILE")]
    file: String,

    /// Maximum pathway length
    #[arg(long, default_value_t = 5, require_equals = true)]
    cutoff: usize,

    /// Pathway explosion guard (default matches the upstream default of 1000)
    #[arg(long, require_equals = true)]
    maxnumpath: Option<usize>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

/// The JSON shape this demonstrator binary accepts. Parsing and classifying stoichiometric
/// models is the job of an external model loader; this is only a minimal description to drive
/// the core against hand-written or pre-processed test networks.
#[derive(Deserialize)]
struct GraphDescription {
    reactions: Vec<ReactionDescription>,
    seeds: Vec<String>,
}

#[derive(Deserialize)]
struct ReactionDescription {
    id: String,
    reactants: Vec<String>,
    products: Vec<String>,
}

fn load_graph(description: &GraphDescription) -> (BipartiteGraph, BTreeSet<MetaboliteId>) {
    let mut graph = BipartiteGraph::new();
    for reaction in &description.reactions {
        graph.add_reaction(
            ReactionId::new(reaction.id.clone()),
            reaction.reactants.iter().cloned().map(MetaboliteId::new),
            reaction.products.iter().cloned().map(MetaboliteId::new),
        );
    }
    let seeds = description
        .seeds
        .iter()
        .cloned()
        .map(MetaboliteId::new)
        .collect();
    (graph, seeds)
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let raw = std::fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", args.file, e);
        std::process::exit(1);
    });
    let description: GraphDescription = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {}", args.file, e);
        std::process::exit(1);
    });

    let (graph, seeds) = load_graph(&description);
    println!(
        "Loaded {} reaction(s), {} seed metabolite(s).",
        graph.reactions().count(),
        seeds.len()
    );

    let outcome = find_pathways(&graph, &seeds, args.cutoff, args.maxnumpath).unwrap_or_else(|e| {
        eprintln!("Pathway enumeration failed: {e}");
        std::process::exit(1);
    });

    println!(
        "Scope: {} metabolite(s) reachable from the seed set.",
        outcome.scope.len()
    );
    println!(
        "Acyclic pathway table: {} entries. Cyclic pathway table: {} entries.",
        outcome.table.len(),
        outcome.cyclic.len()
    );
}
