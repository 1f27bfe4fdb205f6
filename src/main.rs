use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use treestep::{listing, BstEngine, EngineConfig, NumericKey, Operation, Playback, Step, TreeStats};

#[derive(Parser, Debug)]
#[command(name = "treestep", about = "Step-by-step binary search tree engine")]
struct Cli {
    /// Comma-separated keys to build the tree from (default: 25-key starter tree).
    #[arg(long, value_delimiter = ',', global = true)]
    keys: Option<Vec<NumericKey>>,
    /// Start from an empty tree.
    #[arg(long, global = true, conflicts_with = "keys")]
    empty: bool,
    /// Log every previewed step at trace level (needs RUST_LOG=trace).
    #[arg(long, global = true)]
    trace: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the step log of an operation without changing the tree.
    Preview {
        /// Operation name: insert, delete, search, inorder, preorder, postorder,
        /// min, max, successor or predecessor.
        operation: Operation,
        /// Key argument, for operations that take one.
        #[arg(allow_negative_numbers = true)]
        key: Option<NumericKey>,
    },
    /// Play an operation to the end, committing at its mutating step.
    Play {
        /// Operation name.
        operation: Operation,
        /// Key argument, for operations that take one.
        #[arg(allow_negative_numbers = true)]
        key: Option<NumericKey>,
    },
    /// Print height, node count, min and max.
    Stats,
    /// Print the tree shape in pre-order.
    Snapshot,
    /// Print the pseudocode listing of an operation.
    Pseudocode {
        /// Operation name.
        operation: Operation,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match (cli.keys, cli.empty) {
        (Some(keys), _) => EngineConfig::empty().with_seed_keys(keys),
        (None, true) => EngineConfig::empty(),
        (None, false) => EngineConfig::starter(),
    }
    .with_step_tracing(cli.trace);
    let mut engine = BstEngine::new(config);

    match cli.command {
        Commands::Preview { operation, key } => run_preview(&engine, operation, key)?,
        Commands::Play { operation, key } => run_play(&mut engine, operation, key)?,
        Commands::Stats => print_stats(&engine.stats()),
        Commands::Snapshot => run_snapshot(&engine),
        Commands::Pseudocode { operation } => {
            for (idx, line) in listing::pseudocode(operation).iter().enumerate() {
                println!("{idx}\t{line}");
            }
        }
    }

    Ok(())
}

fn run_preview(
    engine: &BstEngine<NumericKey>,
    op: Operation,
    key: Option<NumericKey>,
) -> Result<()> {
    let steps = engine
        .preview(op, key)
        .with_context(|| format!("preview of {op} failed"))?;
    if steps.is_empty() {
        println!("No steps (tree is empty).");
    }
    for (idx, step) in steps.iter().enumerate() {
        print_step(idx, step);
    }
    Ok(())
}

fn run_play(
    engine: &mut BstEngine<NumericKey>,
    op: Operation,
    key: Option<NumericKey>,
) -> Result<()> {
    let mut playback =
        Playback::start(engine, op, key).with_context(|| format!("cannot start {op}"))?;
    let mut idx = 0;
    while let Some(step) = playback
        .advance(engine)
        .with_context(|| format!("commit of {op} failed"))?
    {
        print_step(idx, step);
        idx += 1;
    }

    println!();
    println!(
        "committed={}\trevision={}",
        playback.is_committed(),
        engine.revision()
    );
    print_stats(&engine.stats());
    println!("tree\t{}", engine.snapshot());
    Ok(())
}

fn run_snapshot(engine: &BstEngine<NumericKey>) {
    let snapshot = engine.snapshot();
    for node in &snapshot.nodes {
        println!(
            "{}\tleft={}\tright={}",
            node.key,
            or_dash(node.left.as_ref()),
            or_dash(node.right.as_ref())
        );
    }
    println!("fingerprint\t{}", snapshot.fingerprint());
}

fn print_stats(stats: &TreeStats<NumericKey>) {
    println!(
        "nodes={}\theight={}\tmin={}\tmax={}",
        stats.count,
        stats.height,
        or_dash(stats.min.as_ref()),
        or_dash(stats.max.as_ref())
    );
}

fn print_step(idx: usize, step: &Step<NumericKey>) {
    let mut line = format!(
        "{}\t{}\t{}\t{}",
        idx,
        step.kind,
        or_dash(step.node_value.as_ref()),
        step.description
    );
    if let Some(algorithm_line) = step.algorithm_line {
        line.push_str(&format!("\tline={algorithm_line}"));
    }
    if let Some(comparison) = &step.comparison {
        line.push_str(&format!("\tcmp={comparison}"));
    }
    if let Some(edge) = &step.highlight_edge {
        line.push_str(&format!("\tedge={}->{}", edge.from, edge.to));
    }
    if let Some(state) = step.node_state {
        line.push_str(&format!("\tstate={state}"));
    }
    println!("{line}");
}

fn or_dash(value: Option<&NumericKey>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}
