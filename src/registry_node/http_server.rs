use super::{dataset_routes, query_routes};
use crate::error::{RegistryError, RegistryResult};
use crate::registry_node::RegistryNode;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer as ActixHttpServer};
use log::info;
use std::sync::Arc;

/// HTTP server for the registry node.
///
/// RegistryHttpServer exposes the read-only query endpoints over a node
/// whose datasets were loaded before the server starts. Every endpoint is a
/// GET returning JSON; there are no mutating routes.
pub struct RegistryHttpServer {
    /// The registry node
    node: Arc<RegistryNode>,
    /// The HTTP server bind address
    bind_address: String,
}

/// Shared application state for the HTTP server.
pub struct AppState {
    /// The registry node
    pub node: Arc<RegistryNode>,
}

impl RegistryHttpServer {
    /// Create a new HTTP server serving the given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The RegistryNode instance to use for processing requests
    /// * `bind_address` - The address to bind to (e.g., "127.0.0.1:8000")
    pub fn new(node: RegistryNode, bind_address: &str) -> Self {
        Self {
            node: Arc::new(node),
            bind_address: bind_address.to_string(),
        }
    }

    /// Run the HTTP server.
    ///
    /// This method starts the HTTP server and begins accepting client
    /// connections, serving the query endpoints until the process stops.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if:
    /// * There is an error binding to the specified address
    /// * There is an error while running the server
    pub async fn run(&self) -> RegistryResult<()> {
        info!("HTTP server running on {}", self.bind_address);

        let app_state = web::Data::new(AppState {
            node: self.node.clone(),
        });

        let server = ActixHttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(app_state.clone())
                .route(
                    "/loaded_data",
                    web::get().to(dataset_routes::get_loaded_data),
                )
                .route(
                    "/aircraft_models",
                    web::get().to(query_routes::get_aircraft_models),
                )
                .route(
                    "/active_aircrafts",
                    web::get().to(query_routes::get_active_aircrafts),
                )
                .route(
                    "/agg_active_aircrafts",
                    web::get().to(query_routes::get_aggregated_active_aircrafts),
                )
                .route(
                    "/agg_active_aircrafts2",
                    web::get().to(query_routes::get_aggregated_active_aircrafts2),
                )
                .route(
                    "/active_aircrafts_pivot",
                    web::get().to(query_routes::get_active_aircrafts_pivot),
                )
        })
        .bind(&self.bind_address)
        .map_err(|e| RegistryError::Config(format!("Failed to bind HTTP server: {}", e)))?
        .run();

        server
            .await
            .map_err(|e| RegistryError::Config(format!("HTTP server error: {}", e)))?;

        Ok(())
    }
}
