//! Deployment descriptor loading and evaluation.
//!
//! A descriptor is a TOML file with one `[[node]]` table per node. Evaluating
//! it produces one [`NodeConfigBuilder`] per node, driven by the fields that
//! are present.
//!
//! # Example
//!
//! ```
//! use cordform::config::Descriptor;
//!
//! let descriptor = Descriptor::parse_toml(r#"
//! [[node]]
//! name = "NodeA"
//! p2p_port = 10005
//! rpc_port = 10006
//! "#).unwrap();
//!
//! let builders = descriptor.builders();
//! assert_eq!(builders[0].config().get_str("p2pAddress"), Some("localhost:10005"));
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};
use crate::node::{NodeConfigBuilder, RpcUser};

/// One `[[node]]` entry of a descriptor.
///
/// Every field is optional. Values are forwarded to the builder unchecked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDefinition {
    pub name: Option<String>,
    pub nearest_city: Option<String>,
    pub p2p_port: Option<i64>,
    pub rpc_port: Option<i64>,
    pub notary_node_port: Option<i64>,
    pub advertised_services: Option<Vec<String>>,
    pub notary_cluster_addresses: Option<Vec<String>>,
    pub rpc_users: Option<Vec<RpcUser>>,
}

impl NodeDefinition {
    /// Run the setters for every field present on a fresh builder.
    #[must_use]
    pub fn to_builder(&self) -> NodeConfigBuilder {
        let mut builder = NodeConfigBuilder::new();

        if let Some(name) = &self.name {
            builder.set_name(name.as_str());
        }
        if let Some(city) = &self.nearest_city {
            builder.set_nearest_city(city.as_str());
        }
        if let Some(port) = self.p2p_port {
            builder.set_p2p_port(port);
        }
        if let Some(port) = self.rpc_port {
            builder.set_rpc_port(port);
        }
        if let Some(port) = self.notary_node_port {
            builder.set_notary_node_port(port);
        }
        if let Some(services) = &self.advertised_services {
            builder.set_advertised_services(services.clone());
        }
        if let Some(addresses) = &self.notary_cluster_addresses {
            builder.set_notary_cluster_addresses(addresses.clone());
        }
        if let Some(users) = &self.rpc_users {
            builder.set_rpc_users(users.clone());
        }

        builder
    }
}

/// A parsed deployment descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct Descriptor {
    /// Logging and tracing configuration for the tool itself.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Node definitions, in file order.
    #[serde(default, rename = "node")]
    pub nodes: Vec<NodeDefinition>,
}

impl Descriptor {
    /// Load and validate a descriptor from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a descriptor from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let descriptor: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(ConfigError::MissingField { field: "node" }.into());
        }
        self.logging.validate()?;
        Ok(())
    }

    /// Evaluate every node definition into a builder, in file order.
    #[must_use]
    pub fn builders(&self) -> Vec<NodeConfigBuilder> {
        debug!(nodes = self.nodes.len(), "Evaluating node definitions");
        self.nodes.iter().map(NodeDefinition::to_builder).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_descriptor_is_rejected() {
        let result = Descriptor::parse_toml("[logging]\nlevel = \"info\"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "node" }))
        ));
    }

    #[test]
    fn logging_section_is_optional() {
        let descriptor = Descriptor::parse_toml("[[node]]\nname = \"NodeA\"\n").expect("parse");

        assert_eq!(descriptor.logging.format, "pretty");
        assert_eq!(descriptor.nodes.len(), 1);
    }

    #[test]
    fn unknown_node_field_is_a_parse_error() {
        let result = Descriptor::parse_toml("[[node]]\nname = \"NodeA\"\nrpcPort = 1\n");

        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn absent_fields_set_no_keys() {
        let builder = NodeDefinition {
            rpc_port: Some(10006),
            ..Default::default()
        }
        .to_builder();

        let keys: Vec<&str> = builder.config().keys().collect();
        assert_eq!(keys, vec!["rpcAddress"]);
        assert_eq!(builder.name(), None);
    }
}
