//! Work order API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::work_order::{
        CreateWorkOrder, NextNumberResponse, PrepareRequest, PrepareResponse, TransitionRequest,
        UpdateWorkOrder, WorkOrderQuery, WorkOrderView,
    },
};

/// List work orders
#[utoipa::path(
    get,
    path = "/work-orders",
    tag = "work_orders",
    params(WorkOrderQuery),
    responses(
        (status = 200, description = "Work orders with display status", body = Vec<WorkOrderView>)
    )
)]
pub async fn list_work_orders(
    State(state): State<crate::AppState>,
    Query(query): Query<WorkOrderQuery>,
) -> AppResult<Json<Vec<WorkOrderView>>> {
    let orders = state.services.work_orders.list(&query).await?;
    Ok(Json(orders))
}

/// Get a work order
#[utoipa::path(
    get,
    path = "/work-orders/{id}",
    tag = "work_orders",
    params(("id" = String, Path, description = "Work order ID")),
    responses(
        (status = 200, description = "Work order", body = WorkOrderView),
        (status = 404, description = "Work order not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_work_order(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<WorkOrderView>> {
    let order = state.services.work_orders.get_by_id(&id).await?;
    Ok(Json(order))
}

/// Next order number
#[utoipa::path(
    get,
    path = "/work-orders/next-number",
    tag = "work_orders",
    responses(
        (status = 200, description = "Next free order number", body = NextNumberResponse)
    )
)]
pub async fn next_number(
    State(state): State<crate::AppState>,
) -> AppResult<Json<NextNumberResponse>> {
    let next = state.services.work_orders.next_number().await?;
    Ok(Json(next))
}

/// Create a work order
#[utoipa::path(
    post,
    path = "/work-orders",
    tag = "work_orders",
    request_body = CreateWorkOrder,
    responses(
        (status = 201, description = "Work order created", body = WorkOrderView),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse),
        (status = 409, description = "Order number already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_work_order(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateWorkOrder>,
) -> AppResult<(StatusCode, Json<WorkOrderView>)> {
    let order = state.services.work_orders.create(data).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Update a work order
#[utoipa::path(
    put,
    path = "/work-orders/{id}",
    tag = "work_orders",
    params(("id" = String, Path, description = "Work order ID")),
    request_body = UpdateWorkOrder,
    responses(
        (status = 200, description = "Work order updated", body = WorkOrderView)
    )
)]
pub async fn update_work_order(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateWorkOrder>,
) -> AppResult<Json<WorkOrderView>> {
    let order = state.services.work_orders.update(&id, data).await?;
    Ok(Json(order))
}

/// Change the status of a work order
#[utoipa::path(
    post,
    path = "/work-orders/{id}/transition",
    tag = "work_orders",
    params(("id" = String, Path, description = "Work order ID")),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Work order after transition", body = WorkOrderView),
        (status = 409, description = "Transition not allowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn transition_work_order(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<TransitionRequest>,
) -> AppResult<Json<WorkOrderView>> {
    let order = state.services.work_orders.transition(&id, request).await?;
    Ok(Json(order))
}

/// Hand a batch of scheduled orders to the field
#[utoipa::path(
    post,
    path = "/work-orders/prepare",
    tag = "work_orders",
    request_body = PrepareRequest,
    responses(
        (status = 200, description = "Prepared and skipped orders", body = PrepareResponse)
    )
)]
pub async fn prepare_work_orders(
    State(state): State<crate::AppState>,
    Json(request): Json<PrepareRequest>,
) -> AppResult<Json<PrepareResponse>> {
    request.validate()?;
    let outcome = state.services.work_orders.prepare(&request.ids).await?;
    Ok(Json(outcome))
}

/// Delete a work order
#[utoipa::path(
    delete,
    path = "/work-orders/{id}",
    tag = "work_orders",
    params(("id" = String, Path, description = "Work order ID")),
    responses(
        (status = 204, description = "Work order deleted")
    )
)]
pub async fn delete_work_order(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.work_orders.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
