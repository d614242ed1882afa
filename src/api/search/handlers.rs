use crate::api::models::*;
use crate::solr::SearchParams;
use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use tracing::{debug, info};

pub async fn search_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, AppError> {
    let query = SearchQuery::from_pairs(pairs);
    let params = SearchParams::new(query.q);

    info!(q = %params.q, rows = params.rows, "Searching");

    let document = state.solr.select(&params).await?;

    debug!(response = %document, "Search engine response");

    Ok(Json(document))
}
