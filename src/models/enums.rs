//! Shared domain enums (persisted as SMALLINT codes)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::maintenance::MaintenanceError;

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Kind of maintenance work carried by a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum MaintenanceType {
    Preventive = 0,
    Corrective = 1,
    Predictive = 2,
    PeriodicReview = 3,
    Facility = 4,
    Improvement = 5,
    Overhaul = 6,
}

impl MaintenanceType {
    /// Whether orders of this type are counted as failure events
    pub fn is_failure(self) -> bool {
        matches!(self, MaintenanceType::Corrective)
    }
}

impl TryFrom<i16> for MaintenanceType {
    type Error = MaintenanceError;

    fn try_from(v: i16) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(MaintenanceType::Preventive),
            1 => Ok(MaintenanceType::Corrective),
            2 => Ok(MaintenanceType::Predictive),
            3 => Ok(MaintenanceType::PeriodicReview),
            4 => Ok(MaintenanceType::Facility),
            5 => Ok(MaintenanceType::Improvement),
            6 => Ok(MaintenanceType::Overhaul),
            other => Err(MaintenanceError::UnknownCode {
                field: "maintenance_type",
                code: other,
            }),
        }
    }
}

impl From<MaintenanceType> for i16 {
    fn from(t: MaintenanceType) -> Self {
        t as i16
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceType::Preventive => "Preventive",
            MaintenanceType::Corrective => "Corrective",
            MaintenanceType::Predictive => "Predictive",
            MaintenanceType::PeriodicReview => "Periodic review",
            MaintenanceType::Facility => "Facility",
            MaintenanceType::Improvement => "Improvement",
            MaintenanceType::Overhaul => "Overhaul",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// WorkOrderStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a work order.
///
/// `Delayed` is a display state derived from the scheduled date; it is only
/// ever found in storage on legacy rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum WorkOrderStatus {
    Scheduled = 0,
    InField = 1,
    Executed = 2,
    Delayed = 3,
    WaitingParts = 4,
    Deactivated = 5,
}

impl TryFrom<i16> for WorkOrderStatus {
    type Error = MaintenanceError;

    fn try_from(v: i16) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(WorkOrderStatus::Scheduled),
            1 => Ok(WorkOrderStatus::InField),
            2 => Ok(WorkOrderStatus::Executed),
            3 => Ok(WorkOrderStatus::Delayed),
            4 => Ok(WorkOrderStatus::WaitingParts),
            5 => Ok(WorkOrderStatus::Deactivated),
            other => Err(MaintenanceError::UnknownCode {
                field: "status",
                code: other,
            }),
        }
    }
}

impl From<WorkOrderStatus> for i16 {
    fn from(s: WorkOrderStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WorkOrderStatus::Scheduled => "Scheduled",
            WorkOrderStatus::InField => "In field",
            WorkOrderStatus::Executed => "Executed",
            WorkOrderStatus::Delayed => "Delayed",
            WorkOrderStatus::WaitingParts => "Waiting parts",
            WorkOrderStatus::Deactivated => "Deactivated",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum EquipmentCategory {
    #[default]
    Industrial = 0,
    Facility = 1,
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Operational status of an equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum EquipmentStatus {
    #[default]
    Active = 0,
    Inactive = 1,
    Deactivated = 2,
}
