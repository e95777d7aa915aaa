//! Deployment descriptor and tool configuration.

pub mod descriptor;
pub mod logging;

pub use descriptor::{Descriptor, NodeDefinition};
pub use logging::LoggingConfig;
