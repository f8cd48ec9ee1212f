use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};

use spanning_forest::{
    boruvka_mst, kruskal_mst, lazy_prim_mst, SpanningForest, WeightedGraph,
};

type Solver = fn(&WeightedGraph) -> spanning_forest::Result<SpanningForest>;

static SOLVERS: [(&str, Solver); 3] = [
    ("lazy-prim", lazy_prim_mst),
    ("boruvka", boruvka_mst),
    ("kruskal", kruskal_mst),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    LazyPrim,
    Boruvka,
    Kruskal,
    All,
}

impl Algorithm {
    fn solvers(self) -> &'static [(&'static str, Solver)] {
        match self {
            Algorithm::LazyPrim => &SOLVERS[0..1],
            Algorithm::Boruvka => &SOLVERS[1..2],
            Algorithm::Kruskal => &SOLVERS[2..3],
            Algorithm::All => &SOLVERS,
        }
    }
}

/// Minimum spanning forest of a random edge-weighted graph.
#[derive(Debug, Parser)]
#[command(name = "mst", version)]
struct Args {
    /// Number of vertices
    #[arg(long, default_value_t = 8)]
    vertices: usize,

    /// Number of edges
    #[arg(long, default_value_t = 16)]
    edges: usize,

    /// Seed for the edge generator; drawn from entropy if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Use the fixed 8-vertex reference graph instead of a random one
    #[arg(long, conflicts_with_all = ["vertices", "edges", "seed"])]
    tiny: bool,

    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Verify acyclicity, spanning and cut optimality of each result
    #[arg(long)]
    check: bool,

    /// Repeat for more log output on stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn build_graph(args: &Args) -> Result<WeightedGraph> {
    if args.tiny {
        return Ok(WeightedGraph::tiny());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    WeightedGraph::random(args.vertices, args.edges, &mut rng)
        .context("generating random graph")
}

fn run(name: &str, solve: Solver, graph: &WeightedGraph, check: bool) -> Result<SpanningForest> {
    let forest = solve(graph)?;
    info!(algorithm = name, edges = forest.len(), weight = forest.weight(), "computed");

    if check {
        forest
            .check(graph)
            .with_context(|| format!("{} produced an invalid spanning forest", name))?;
        info!(algorithm = name, "check passed");
    }
    Ok(forest)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let graph = build_graph(&args)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph ready"
    );

    let solvers = args.algorithm.solvers();
    let mut output = BufWriter::new(std::io::stdout());
    for (i, &(name, solve)) in solvers.iter().enumerate() {
        let forest = run(name, solve, &graph, args.check)?;
        if solvers.len() > 1 {
            if i > 0 {
                writeln!(output)?;
            }
            writeln!(output, "# {}", name)?;
        }
        write!(output, "{}", forest)?;
    }
    output.flush()?;
    Ok(())
}
