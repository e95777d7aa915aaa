//! Command-line interface definitions.

pub mod check;
pub mod nodes;
pub mod output;
pub mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::node::NodeConfigBuilder;

/// Cordform - assemble per-node deployment configuration.
#[derive(Parser, Debug)]
#[command(name = "cordform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to deployment descriptor
    #[arg(short, long, global = true, default_value = "deployment.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the nodes defined in the descriptor
    Nodes,

    /// Print assembled node configuration as JSON
    Render(RenderArgs),

    /// Validate the descriptor without rendering
    Check,
}

/// Arguments for the `render` subcommand.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Only render the node with this label (legal name, or node-<index> when unnamed)
    #[arg(long)]
    pub node: Option<String>,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}

/// Display label for a node: its legal name, or `node-<index>` when unnamed.
#[must_use]
pub fn node_label(index: usize, builder: &NodeConfigBuilder) -> String {
    builder
        .name()
        .map_or_else(|| format!("node-{index}"), str::to_string)
}
