use actix_web::{http::StatusCode, web, HttpResponse};

use super::http_helpers::with_node;
use super::http_server::AppState;

/// List every loaded dataset with its columns and row count.
pub async fn get_loaded_data(state: web::Data<AppState>) -> HttpResponse {
    with_node(state, |node| {
        Ok((StatusCode::OK, serde_json::to_value(node.loaded_data()?)?))
    })
    .await
}
