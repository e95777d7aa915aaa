//! Handler for the `render` command.

use std::collections::btree_map::{BTreeMap, Entry};
use std::io::{self, Write};

use tracing::debug;

use crate::cli::{node_label, RenderArgs};
use crate::config::Descriptor;
use crate::error::{Error, Result};
use crate::node::{NodeConfig, NodeConfigBuilder};

/// Assemble the node configurations to print, keyed by node label.
///
/// Every builder must have a distinct label, whether or not `only` is set.
/// With `only` set, the result holds exactly the node with that label or the
/// call fails.
pub fn collect(
    builders: &[NodeConfigBuilder],
    only: Option<&str>,
) -> Result<BTreeMap<String, NodeConfig>> {
    let mut labelled = BTreeMap::new();
    for (index, builder) in builders.iter().enumerate() {
        match labelled.entry(node_label(index, builder)) {
            Entry::Occupied(entry) => return Err(Error::DuplicateNode(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(builder);
            }
        }
    }

    if let Some(label) = only {
        labelled.retain(|key, _| key == label);
        if labelled.is_empty() {
            return Err(Error::NodeNotFound(label.to_string()));
        }
    }

    Ok(labelled
        .into_iter()
        .map(|(label, builder)| (label, builder.node_config()))
        .collect())
}

/// Write rendered node configuration as JSON followed by a newline.
pub fn write_json<W: Write>(
    out: &mut W,
    rendered: &BTreeMap<String, NodeConfig>,
    compact: bool,
) -> Result<()> {
    let json = if compact {
        serde_json::to_string(rendered)?
    } else {
        serde_json::to_string_pretty(rendered)?
    };
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

/// Execute `render`.
pub fn execute(descriptor: &Descriptor, args: &RenderArgs) -> Result<()> {
    let rendered = collect(&descriptor.builders(), args.node.as_deref())?;
    debug!(nodes = rendered.len(), "Rendering node configuration");

    let stdout = io::stdout();
    write_json(&mut stdout.lock(), &rendered, args.compact)
}
