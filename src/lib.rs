//! # Aeroreg
//!
//! Read-only HTTP query service over a fixed collection of aircraft-registry
//! datasets. The service loads flat tables once at startup and answers every
//! request with pure, in-memory relational transformations.
//!
//! ## Core Components
//!
//! * `datasets` - Table model and the dataset store with its swappable backends
//! * `query` - Relational operations (filter, join, group/aggregate, pivot)
//!   and the registry-specific pipelines composed from them
//! * `registry_node` - Node implementation, HTTP server and route handlers
//! * `error` - Error types and handling
//!
//! ## Architecture
//!
//! A `RegistryNode` owns an immutable [`datasets::DatasetStore`] populated
//! before the server binds. Every endpoint runs a stateless pipeline from the
//! `query` module over the stored tables and wraps the result into the wire
//! records in `registry_node::responses`. Nothing is mutated or cached across
//! requests.

pub mod datasets;
pub mod error;
pub mod query;
pub mod registry_node;

// Re-export main types for convenience
pub use datasets::{DatasetStore, FileDatasetStore, MemoryDatasetStore, Table, Value};
pub use error::{RegistryError, RegistryResult};
pub use registry_node::config::{load_node_config, NodeConfig};
pub use registry_node::{RegistryHttpServer, RegistryNode};
