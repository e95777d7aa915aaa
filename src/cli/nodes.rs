//! Handler for the `nodes` command.

use crate::cli::{node_label, output};
use crate::config::Descriptor;
use crate::error::Result;

/// Execute `nodes`.
pub fn execute(descriptor: &Descriptor) -> Result<()> {
    output::section("Nodes");
    for (index, builder) in descriptor.builders().iter().enumerate() {
        output::key_value(
            &node_label(index, builder),
            format!("{} keys", builder.node_config().len()),
        );
    }
    Ok(())
}
