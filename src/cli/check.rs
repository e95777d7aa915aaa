//! Handler for the `check` command.

use std::path::Path;

use crate::cli::output;
use crate::config::Descriptor;
use crate::error::Result;

/// Report on a descriptor that loaded and evaluated cleanly.
pub fn execute(path: &Path, descriptor: &Descriptor) -> Result<()> {
    let builders = descriptor.builders();
    let unnamed = builders.iter().filter(|b| b.name().is_none()).count();

    output::ok("Descriptor is valid");
    output::key_value("Path", path.display());
    output::key_value("Nodes", builders.len());
    if unnamed > 0 {
        output::note(&format!("{unnamed} node(s) have no legal name"));
    }
    Ok(())
}
