use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

use super::http_server::AppState;
use crate::{error::RegistryResult, registry_node::RegistryNode};

/// Execute a closure against the node and return standardized JSON.
pub async fn with_node<F>(state: web::Data<AppState>, func: F) -> HttpResponse
where
    F: FnOnce(&RegistryNode) -> RegistryResult<(StatusCode, serde_json::Value)>,
{
    match func(&state.node) {
        Ok((status, value)) => HttpResponse::build(status).json(value),
        Err(e) => {
            log::error!("Request failed: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
