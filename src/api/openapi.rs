//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, reliability, work_orders};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GMAO API",
        version = "0.3.0",
        description = "Maintenance Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Work orders
        work_orders::list_work_orders,
        work_orders::get_work_order,
        work_orders::next_number,
        work_orders::create_work_order,
        work_orders::update_work_order,
        work_orders::transition_work_order,
        work_orders::prepare_work_orders,
        work_orders::delete_work_order,
        // Reliability
        reliability::get_reliability,
        reliability::compute_reliability,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::MaintenanceType,
            crate::models::enums::WorkOrderStatus,
            crate::models::enums::EquipmentCategory,
            crate::models::enums::EquipmentStatus,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::ScheduleTask,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Work orders
            crate::models::work_order::WorkOrder,
            crate::models::work_order::WorkOrderRecord,
            crate::models::work_order::WorkOrderView,
            crate::models::work_order::ChecklistItem,
            crate::models::work_order::ManHourEntry,
            crate::models::work_order::CreateWorkOrder,
            crate::models::work_order::UpdateWorkOrder,
            crate::models::work_order::TransitionRequest,
            crate::models::work_order::PrepareRequest,
            crate::models::work_order::PrepareResponse,
            crate::models::work_order::WorkOrderQuery,
            crate::models::work_order::NextNumberResponse,
            // Reliability
            crate::models::reliability::ReliabilityMetrics,
            crate::models::reliability::ReliabilityReport,
            crate::models::reliability::ReliabilityQuery,
            crate::models::reliability::ComputeReliabilityRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment management"),
        (name = "work_orders", description = "Work order management and lifecycle"),
        (name = "reliability", description = "MTBF, MTTR and availability")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
