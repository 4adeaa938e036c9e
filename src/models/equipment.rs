//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{EquipmentCategory, EquipmentStatus};

/// Legacy maintenance task embedded in an equipment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleTask {
    pub id: String,
    pub description: Option<String>,
    /// Maintenance type code (0=preventive ... 6=overhaul)
    pub maintenance_type: Option<i16>,
    pub scheduled_date: Option<NaiveDate>,
}

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    /// Identifier, immutable once created
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub category: EquipmentCategory,
    pub status: EquipmentStatus,
    /// Carried through, no computation depends on it
    pub is_critical: bool,
    #[schema(value_type = Vec<ScheduleTask>)]
    pub schedule: Json<Vec<ScheduleTask>>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub location: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub status: Option<EquipmentStatus>,
    pub is_critical: Option<bool>,
    pub schedule: Option<Vec<ScheduleTask>>,
}

/// Update equipment request (the identifier cannot change)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub location: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub status: Option<EquipmentStatus>,
    pub is_critical: Option<bool>,
    pub schedule: Option<Vec<ScheduleTask>>,
}
