//! Cordform - per-node deployment configuration assembly.
//!
//! A deployment descriptor lists the nodes of a test network. Each node
//! definition is evaluated into a [`node::NodeConfigBuilder`], whose setters
//! record one configuration key apiece (`myLegalName`, `p2pAddress`, ...).
//! The assembled map is handed to a node config writer, which is not part of
//! this crate.
//!
//! # Modules
//!
//! - [`node`] - The builder and the flat key-value [`node::NodeConfig`]
//! - [`config`] - Descriptor loading from TOML and logging setup
//! - [`cli`] - Command-line handlers for the `cordform` binary
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use cordform::node::NodeConfigBuilder;
//!
//! let mut builder = NodeConfigBuilder::new();
//! builder.set_name("NodeA").set_p2p_port(10005).set_rpc_port(10006);
//!
//! assert_eq!(builder.config().get_str("p2pAddress"), Some("localhost:10005"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod node;
