//! Setter-style builder for a node's deployment configuration.
//!
//! One [`NodeConfigBuilder`] is created per node definition in a deployment
//! descriptor. Each setter records exactly one configuration key, replacing
//! any earlier value for that key. Nothing here validates its input: ports
//! outside the valid range and malformed RPC user entries are passed through
//! to whatever consumes the final configuration.

use serde_json::{Map, Value};
use tracing::debug;

use super::config::NodeConfig;

/// Host used for every address derived from a port setter.
pub const DEFAULT_HOST: &str = "localhost";

pub const KEY_LEGAL_NAME: &str = "myLegalName";
pub const KEY_NEAREST_CITY: &str = "nearestCity";
pub const KEY_P2P_ADDRESS: &str = "p2pAddress";
pub const KEY_RPC_ADDRESS: &str = "rpcAddress";
pub const KEY_NOTARY_NODE_ADDRESS: &str = "notaryNodeAddress";
pub const KEY_ADVERTISED_SERVICES: &str = "advertisedServices";
pub const KEY_NOTARY_CLUSTER_ADDRESSES: &str = "notaryClusterAddresses";
pub const KEY_RPC_USERS: &str = "rpcUsers";

/// A single RPC user entry.
///
/// Free-form. The recommended shape is
/// `{ username, password, permissions }` (see [`rpc_user`]), but any map is
/// accepted and forwarded as-is.
pub type RpcUser = Map<String, Value>;

/// Build an RPC user entry in the recommended shape.
#[must_use]
pub fn rpc_user<I, S>(username: &str, password: &str, permissions: I) -> RpcUser
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let permissions: Vec<Value> = permissions
        .into_iter()
        .map(|p| Value::String(p.into()))
        .collect();

    let mut user = Map::new();
    user.insert("username".into(), Value::String(username.to_string()));
    user.insert("password".into(), Value::String(password.to_string()));
    user.insert("permissions".into(), Value::Array(permissions));
    user
}

fn local_address(port: i64) -> String {
    format!("{DEFAULT_HOST}:{port}")
}

/// Accumulates the configuration of one node.
#[derive(Debug, Clone, Default)]
pub struct NodeConfigBuilder {
    name: Option<String>,
    advertised_services: Vec<String>,
    notary_cluster_addresses: Vec<String>,
    rpc_users: Vec<RpcUser>,
    config: NodeConfig,
}

impl NodeConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the legal name of the node.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        debug!(name = %name, "Setting node legal name");
        self.config.insert(KEY_LEGAL_NAME, name.as_str());
        self.name = Some(name);
        self
    }

    /// Set the city nearest to the node.
    pub fn set_nearest_city(&mut self, city: impl Into<String>) -> &mut Self {
        let city = city.into();
        debug!(name = ?self.name, city = %city, "Setting nearest city");
        self.config.insert(KEY_NEAREST_CITY, city);
        self
    }

    /// Set the peer-to-peer messaging port.
    pub fn set_p2p_port(&mut self, port: i64) -> &mut Self {
        debug!(name = ?self.name, port, "Setting P2P port");
        self.config.insert(KEY_P2P_ADDRESS, local_address(port));
        self
    }

    /// Set the RPC port.
    pub fn set_rpc_port(&mut self, port: i64) -> &mut Self {
        debug!(name = ?self.name, port, "Setting RPC port");
        self.config.insert(KEY_RPC_ADDRESS, local_address(port));
        self
    }

    /// Set the port the node's notary cluster member binds to.
    pub fn set_notary_node_port(&mut self, port: i64) -> &mut Self {
        debug!(name = ?self.name, port, "Setting notary node port");
        self.config.insert(KEY_NOTARY_NODE_ADDRESS, local_address(port));
        self
    }

    pub fn set_advertised_services(&mut self, services: Vec<String>) -> &mut Self {
        self.advertised_services = services;
        self
    }

    /// Addresses of the other members when running a distributed notary.
    pub fn set_notary_cluster_addresses(&mut self, addresses: Vec<String>) -> &mut Self {
        self.notary_cluster_addresses = addresses;
        self
    }

    pub fn set_rpc_users(&mut self, users: Vec<RpcUser>) -> &mut Self {
        self.rpc_users = users;
        self
    }

    pub fn add_rpc_user(&mut self, user: RpcUser) -> &mut Self {
        self.rpc_users.push(user);
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn advertised_services(&self) -> &[String] {
        &self.advertised_services
    }

    #[must_use]
    pub fn notary_cluster_addresses(&self) -> &[String] {
        &self.notary_cluster_addresses
    }

    #[must_use]
    pub fn rpc_users(&self) -> &[RpcUser] {
        &self.rpc_users
    }

    /// Configuration recorded by the setters so far.
    #[must_use]
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Full configuration handed to the node config writer.
    ///
    /// This is [`config`](Self::config) plus the pass-through sequences
    /// (`advertisedServices`, `notaryClusterAddresses`, `rpcUsers`), which are
    /// always present even when empty.
    #[must_use]
    pub fn node_config(&self) -> NodeConfig {
        let mut config = self.config.clone();
        config.insert(KEY_ADVERTISED_SERVICES, self.advertised_services.clone());
        config.insert(
            KEY_NOTARY_CLUSTER_ADDRESSES,
            self.notary_cluster_addresses.clone(),
        );
        config.insert(
            KEY_RPC_USERS,
            self.rpc_users
                .iter()
                .cloned()
                .map(Value::Object)
                .collect::<Vec<_>>(),
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_builder_is_empty() {
        let builder = NodeConfigBuilder::new();

        assert_eq!(builder.name(), None);
        assert!(builder.config().is_empty());
        assert!(builder.advertised_services().is_empty());
        assert!(builder.notary_cluster_addresses().is_empty());
        assert!(builder.rpc_users().is_empty());
    }

    #[test]
    fn set_name_records_legal_name() {
        let mut builder = NodeConfigBuilder::new();
        builder.set_name("O=Bank A,L=London,C=GB");

        assert_eq!(builder.name(), Some("O=Bank A,L=London,C=GB"));
        assert_eq!(
            builder.config().get_str(KEY_LEGAL_NAME),
            Some("O=Bank A,L=London,C=GB")
        );
    }

    #[test]
    fn port_setters_use_default_host() {
        let mut builder = NodeConfigBuilder::new();
        builder
            .set_p2p_port(10005)
            .set_rpc_port(10006)
            .set_notary_node_port(10008);

        let config = builder.config();
        assert_eq!(config.get_str(KEY_P2P_ADDRESS), Some("localhost:10005"));
        assert_eq!(config.get_str(KEY_RPC_ADDRESS), Some("localhost:10006"));
        assert_eq!(
            config.get_str(KEY_NOTARY_NODE_ADDRESS),
            Some("localhost:10008")
        );
    }

    #[test]
    fn ports_are_not_range_checked() {
        let mut builder = NodeConfigBuilder::new();
        builder.set_p2p_port(-1).set_rpc_port(70000);

        assert_eq!(builder.config().get_str(KEY_P2P_ADDRESS), Some("localhost:-1"));
        assert_eq!(
            builder.config().get_str(KEY_RPC_ADDRESS),
            Some("localhost:70000")
        );
    }

    #[test]
    fn last_write_wins() {
        let mut builder = NodeConfigBuilder::new();
        builder
            .set_name("NodeA")
            .set_nearest_city("London")
            .set_name("NodeB")
            .set_nearest_city("New York");

        assert_eq!(builder.name(), Some("NodeB"));
        assert_eq!(builder.config().len(), 2);
        assert_eq!(builder.config().get_str(KEY_LEGAL_NAME), Some("NodeB"));
        assert_eq!(builder.config().get_str(KEY_NEAREST_CITY), Some("New York"));
    }

    #[test]
    fn pass_through_fields_stay_out_of_config() {
        let mut builder = NodeConfigBuilder::new();
        builder
            .set_advertised_services(vec!["corda.notary.validating".into()])
            .add_rpc_user(rpc_user("demo", "demo", ["ALL"]));

        assert!(builder.config().is_empty());
        assert_eq!(builder.rpc_users().len(), 1);
    }

    #[test]
    fn node_config_merges_pass_through_fields() {
        let mut builder = NodeConfigBuilder::new();
        builder
            .set_name("Notary")
            .set_notary_cluster_addresses(vec!["localhost:10009".into()])
            .add_rpc_user(rpc_user("demo", "secret", ["StartFlow.Issue"]));

        let config = builder.node_config();
        assert_eq!(config.get_str(KEY_LEGAL_NAME), Some("Notary"));
        assert_eq!(config.get(KEY_ADVERTISED_SERVICES), Some(&json!([])));
        assert_eq!(
            config.get(KEY_NOTARY_CLUSTER_ADDRESSES),
            Some(&json!(["localhost:10009"]))
        );
        assert_eq!(
            config.get(KEY_RPC_USERS),
            Some(&json!([{
                "username": "demo",
                "password": "secret",
                "permissions": ["StartFlow.Issue"],
            }]))
        );
    }

    #[test]
    fn malformed_rpc_users_are_accepted() {
        let mut user = RpcUser::new();
        user.insert("user".into(), json!(42));

        let mut builder = NodeConfigBuilder::new();
        builder.set_rpc_users(vec![user]);

        assert_eq!(
            builder.node_config().get(KEY_RPC_USERS),
            Some(&json!([{ "user": 42 }]))
        );
    }
}
