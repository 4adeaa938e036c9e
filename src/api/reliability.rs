//! Reliability metrics endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::reliability::{ComputeReliabilityRequest, ReliabilityQuery, ReliabilityReport},
};

/// Reliability report from stored work orders
#[utoipa::path(
    get,
    path = "/reliability",
    tag = "reliability",
    params(ReliabilityQuery),
    responses(
        (status = 200, description = "MTBF, MTTR and availability per equipment", body = ReliabilityReport),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reliability(
    State(state): State<crate::AppState>,
    Query(query): Query<ReliabilityQuery>,
) -> AppResult<Json<ReliabilityReport>> {
    let report = state.services.reliability.report(&query).await?;
    Ok(Json(report))
}

/// Reliability report from caller-supplied work orders
#[utoipa::path(
    post,
    path = "/reliability/compute",
    tag = "reliability",
    request_body = ComputeReliabilityRequest,
    responses(
        (status = 200, description = "MTBF, MTTR and availability per equipment", body = ReliabilityReport),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse)
    )
)]
pub async fn compute_reliability(
    State(state): State<crate::AppState>,
    Json(data): Json<ComputeReliabilityRequest>,
) -> AppResult<Json<ReliabilityReport>> {
    let report = state.services.reliability.compute(data)?;
    Ok(Json(report))
}
