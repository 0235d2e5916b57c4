use clap::{Parser, Subcommand};
use nf_core::{DType, NfError, NfResult};
use nf_graph::{Graph, Tensor};
use nf_ops::MathOps;

#[derive(Parser)]
#[command(name = "nf-cli")]
#[command(about = "nodeflow CLI - build and inspect sample operation graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the demo classifier-head graph and print its node listing
    Demo {
        /// Emit the graph as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> NfResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { json } => cmd_demo(json),
    }
}

fn cmd_demo(json: bool) -> NfResult<()> {
    let graph = build_demo_graph()?;

    if json {
        let rendered = serde_json::to_string_pretty(&graph).map_err(|err| {
            NfError::Construction {
                message: format!("JSON dump failed: {err}"),
            }
        })?;
        println!("{rendered}");
    } else {
        print_listing(&graph);
    }

    Ok(())
}

/// Wire up the graph the original host composed: logits = x*W + b, a
/// log/mean pair on the loss side, argmax/cast/equal/mean for accuracy.
fn build_demo_graph() -> NfResult<Graph> {
    let mut graph = Graph::new();
    let mut ops = MathOps::new();

    let x = graph.constant("x", Tensor::from_f32(vec![1, 2], &[0.2, 0.8])?)?;
    let w = graph.constant("w", Tensor::from_f32(vec![2, 2], &[1.0, 0.0, 0.0, 1.0])?)?;
    let b = graph.constant("b", Tensor::from_f32(vec![1, 2], &[0.1, 0.1])?)?;
    let labels = graph.constant("labels", Tensor::from_f32(vec![1], &[1.0])?)?;

    let logits = ops.matmul_add(&mut graph, x, w, b)?;
    let log_probs = ops.log(&mut graph, logits)?;
    ops.reduce_mean(&mut graph, log_probs)?;

    let predicted = ops.argmax(&mut graph, logits, 1)?;
    let predicted = ops.cast(&mut graph, predicted, DType::Float)?;
    let hits = ops.equal(&mut graph, predicted, labels)?;
    ops.reduce_mean(&mut graph, hits)?;

    Ok(graph)
}

fn print_listing(graph: &Graph) {
    println!("{:<4} {:<14} {:<16} inputs", "id", "name", "type");
    for node in graph.ops() {
        let inputs: Vec<String> = node
            .inputs
            .iter()
            .map(|p| format!("{}:{}", p.op, p.index))
            .collect();
        println!(
            "{:<4} {:<14} {:<16} [{}]",
            node.id.index(),
            node.name,
            node.op_type,
            inputs.join(", ")
        );
    }
    println!("{} nodes total", graph.len());
}
