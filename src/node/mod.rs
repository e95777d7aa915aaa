//! Per-node configuration assembly.

pub mod builder;
pub mod config;

pub use builder::{rpc_user, NodeConfigBuilder, RpcUser, DEFAULT_HOST};
pub use config::NodeConfig;
