//! Node implementation: configuration, the registry node owning the dataset
//! store, and the HTTP server with its route handlers.

pub mod config;
pub mod dataset_routes;
pub mod http_helpers;
pub mod http_server;
pub mod node;
pub mod query_routes;
pub mod responses;

pub use config::{load_node_config, NodeConfig};
pub use http_server::{AppState, RegistryHttpServer};
pub use node::RegistryNode;
