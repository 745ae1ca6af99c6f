use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Deserialize;

use super::http_helpers::with_node;
use super::http_server::AppState;
use crate::query::registry::ActiveAircraftFilter;

/// Pagination parameters for the distinct-models listing.
#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    100
}

/// Optional exact-match filters for the active-aircraft listing.
#[derive(Debug, Deserialize)]
pub struct ActiveAircraftQuery {
    model: Option<String>,
    manufacturer: Option<String>,
}

impl From<ActiveAircraftQuery> for ActiveAircraftFilter {
    fn from(query: ActiveAircraftQuery) -> Self {
        Self {
            manufacturer: query.manufacturer,
            model: query.model,
        }
    }
}

/// Distinct (manufacturer, model, seats), offset-sliced.
pub async fn get_aircraft_models(
    query: web::Query<ModelsQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let ModelsQuery { skip, limit } = query.into_inner();
    with_node(state, move |node| {
        Ok((
            StatusCode::OK,
            serde_json::to_value(node.aircraft_models(skip, limit)?)?,
        ))
    })
    .await
}

/// Joined active aircraft, optionally restricted by manufacturer and model.
pub async fn get_active_aircrafts(
    query: web::Query<ActiveAircraftQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let filter = ActiveAircraftFilter::from(query.into_inner());
    with_node(state, move |node| {
        Ok((
            StatusCode::OK,
            serde_json::to_value(node.active_aircraft(&filter)?)?,
        ))
    })
    .await
}

/// Nested aggregate tree, manufacturer → model → county → count.
pub async fn get_aggregated_active_aircrafts(state: web::Data<AppState>) -> HttpResponse {
    with_node(state, |node| {
        Ok((
            StatusCode::OK,
            serde_json::to_value(node.aggregated_active_aircraft()?)?,
        ))
    })
    .await
}

/// Flat list of (manufacturer, model, county, count) rows.
pub async fn get_aggregated_active_aircrafts2(state: web::Data<AppState>) -> HttpResponse {
    with_node(state, |node| {
        Ok((
            StatusCode::OK,
            serde_json::to_value(node.aggregated_active_aircraft_flat()?)?,
        ))
    })
    .await
}

/// Pivot matrix: header row plus one row per (manufacturer, model).
pub async fn get_active_aircrafts_pivot(state: web::Data<AppState>) -> HttpResponse {
    with_node(state, |node| {
        Ok((
            StatusCode::OK,
            serde_json::to_value(node.active_aircraft_pivot()?)?,
        ))
    })
    .await
}
