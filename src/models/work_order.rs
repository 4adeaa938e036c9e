//! Work order model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{MaintenanceType, WorkOrderStatus};
use crate::maintenance::MaintenanceError;

/// One step of a work order checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    pub action: String,
    #[serde(default)]
    pub completed: bool,
    pub materials: Option<String>,
}

/// Hours spent by one maintainer on a work order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ManHourEntry {
    #[validate(length(min = 1))]
    pub maintainer: String,
    #[validate(range(min = 0.0))]
    pub hours: f64,
}

/// Validated work order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkOrder {
    pub id: String,
    pub equipment_id: String,
    pub maintenance_type: MaintenanceType,
    pub status: WorkOrderStatus,
    pub scheduled_date: NaiveDate,
    /// Start of field execution
    pub started_at: Option<DateTime<Utc>>,
    /// Completion date, set iff status is `executed`
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub man_hours: Vec<ManHourEntry>,
    /// Handed to the field (printed and dispatched)
    #[serde(default)]
    pub is_prepared: bool,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

impl WorkOrder {
    /// Total hours logged by maintainers, `None` when nobody logged any.
    /// Negative entries count as zero.
    pub fn logged_hours(&self) -> Option<f64> {
        if self.man_hours.is_empty() {
            None
        } else {
            Some(self.man_hours.iter().map(|e| e.hours.max(0.0)).sum())
        }
    }
}

/// Work order as stored or supplied by a collaborator.
///
/// Status and type are raw codes and the required fields may be missing on
/// legacy rows; convert with `WorkOrder::try_from`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkOrderRecord {
    pub id: String,
    pub equipment_id: Option<String>,
    /// Type (0=preventive, 1=corrective, 2=predictive, 3=periodic_review, 4=facility, 5=improvement, 6=overhaul)
    pub maintenance_type: i16,
    /// Status (0=scheduled, 1=in_field, 2=executed, 3=delayed, 4=waiting_parts, 5=deactivated)
    pub status: i16,
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<ChecklistItem>>)]
    pub checklist: Option<Json<Vec<ChecklistItem>>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<ManHourEntry>>)]
    pub man_hours: Option<Json<Vec<ManHourEntry>>>,
    #[serde(default)]
    pub is_prepared: bool,
    #[serde(default)]
    pub crea_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modif_date: Option<DateTime<Utc>>,
}

impl TryFrom<WorkOrderRecord> for WorkOrder {
    type Error = MaintenanceError;

    fn try_from(r: WorkOrderRecord) -> Result<Self, Self::Error> {
        let malformed = |reason: String| MaintenanceError::MalformedRecord {
            id: r.id.clone(),
            reason,
        };

        let equipment_id = match r.equipment_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(malformed("missing equipment_id".to_string())),
        };
        let scheduled_date = r
            .scheduled_date
            .ok_or_else(|| malformed("missing scheduled_date".to_string()))?;
        let maintenance_type =
            MaintenanceType::try_from(r.maintenance_type).map_err(|e| malformed(e.to_string()))?;
        let status = WorkOrderStatus::try_from(r.status).map_err(|e| malformed(e.to_string()))?;
        let man_hours = r.man_hours.map(|j| j.0).unwrap_or_default();
        if let Some(entry) = man_hours.iter().find(|e| !e.hours.is_finite() || e.hours < 0.0) {
            return Err(malformed(format!(
                "invalid man-hours {} for {}",
                entry.hours, entry.maintainer
            )));
        }

        Ok(WorkOrder {
            id: r.id,
            equipment_id,
            maintenance_type,
            status,
            scheduled_date,
            started_at: r.started_at,
            end_date: r.end_date,
            description: r.description,
            checklist: r.checklist.map(|j| j.0).unwrap_or_default(),
            man_hours,
            is_prepared: r.is_prepared,
            crea_date: r.crea_date,
            modif_date: r.modif_date,
        })
    }
}

/// Records supplied as raw JSON: anything that does not parse as a
/// [`WorkOrderRecord`] is malformed
impl TryFrom<serde_json::Value> for WorkOrder {
    type Error = MaintenanceError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let id = value
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<unknown>")
            .to_string();
        let record: WorkOrderRecord = serde_json::from_value(value)
            .map_err(|e| MaintenanceError::MalformedRecord { id, reason: e.to_string() })?;
        WorkOrder::try_from(record)
    }
}

/// Work order with its display state for the current day
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkOrderView {
    #[serde(flatten)]
    pub order: WorkOrder,
    /// Stored status, or `delayed` when past due
    pub display_status: WorkOrderStatus,
}

/// Create work order request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkOrder {
    /// Order number; assigned from the numbering sequence when absent
    #[validate(length(min = 1, max = 32))]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub equipment_id: String,
    pub maintenance_type: MaintenanceType,
    /// Scheduled date (YYYY-MM-DD)
    pub scheduled_date: NaiveDate,
    pub description: Option<String>,
    pub checklist: Option<Vec<ChecklistItem>>,
    #[validate(nested)]
    pub man_hours: Option<Vec<ManHourEntry>>,
}

/// Update work order request.
///
/// Status and end date are changed through the transition endpoint only.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkOrder {
    pub maintenance_type: Option<MaintenanceType>,
    pub scheduled_date: Option<NaiveDate>,
    pub started_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub checklist: Option<Vec<ChecklistItem>>,
    #[validate(nested)]
    pub man_hours: Option<Vec<ManHourEntry>>,
}

/// Lifecycle transition request
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionRequest {
    pub status: WorkOrderStatus,
    /// Completion date used when moving to `executed`; defaults to today
    pub end_date: Option<NaiveDate>,
}

/// Batch prepare request (orders handed to the field)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PrepareRequest {
    #[validate(length(min = 1))]
    pub ids: Vec<String>,
}

/// Batch prepare outcome
#[derive(Debug, Serialize, ToSchema)]
pub struct PrepareResponse {
    /// Orders moved to `in_field`
    pub prepared: Vec<WorkOrder>,
    /// Orders left untouched because they were not `scheduled`
    pub skipped: Vec<String>,
}

/// Query parameters for work orders
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct WorkOrderQuery {
    pub equipment_id: Option<String>,
    /// Status code
    pub status: Option<i16>,
    /// Maintenance type code
    pub maintenance_type: Option<i16>,
    /// Scheduled on or after this date (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Scheduled on or before this date (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
}

/// Next order number response
#[derive(Debug, Serialize, ToSchema)]
pub struct NextNumberResponse {
    /// Zero-padded sequence value (e.g. "0008")
    pub number: String,
    /// Sequence value with the configured prefix (e.g. "OS-0008")
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> WorkOrderRecord {
        WorkOrderRecord {
            id: "OS-0001".to_string(),
            equipment_id: Some("E1".to_string()),
            maintenance_type: 1,
            status: 2,
            scheduled_date: NaiveDate::from_ymd_opt(2026, 1, 10),
            started_at: None,
            end_date: NaiveDate::from_ymd_opt(2026, 1, 10),
            description: None,
            checklist: None,
            man_hours: Some(Json(vec![ManHourEntry {
                maintainer: "Ana".to_string(),
                hours: 4.0,
            }])),
            is_prepared: true,
            crea_date: None,
            modif_date: None,
        }
    }

    #[test]
    fn test_record_conversion() {
        let order = WorkOrder::try_from(record()).unwrap();
        assert_eq!(order.equipment_id, "E1");
        assert_eq!(order.maintenance_type, MaintenanceType::Corrective);
        assert_eq!(order.status, WorkOrderStatus::Executed);
        assert_eq!(order.logged_hours(), Some(4.0));
        assert!(order.checklist.is_empty());
    }

    #[test]
    fn test_record_missing_equipment() {
        let mut r = record();
        r.equipment_id = Some("  ".to_string());
        let err = WorkOrder::try_from(r).unwrap_err();
        assert!(matches!(err, MaintenanceError::MalformedRecord { .. }));
    }

    #[test]
    fn test_record_missing_scheduled_date() {
        let mut r = record();
        r.scheduled_date = None;
        assert!(WorkOrder::try_from(r).is_err());
    }

    #[test]
    fn test_record_unknown_status() {
        let mut r = record();
        r.status = 42;
        let err = WorkOrder::try_from(r).unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_record_negative_man_hours() {
        let mut r = record();
        r.man_hours = Some(Json(vec![
            ManHourEntry { maintainer: "Ana".to_string(), hours: 10.0 },
            ManHourEntry { maintainer: "Rui".to_string(), hours: -6.0 },
        ]));
        let err = WorkOrder::try_from(r).unwrap_err();
        assert!(matches!(err, MaintenanceError::MalformedRecord { ref id, .. } if id == "OS-0001"));
    }

    #[test]
    fn test_record_non_finite_man_hours() {
        let mut r = record();
        r.man_hours = Some(Json(vec![ManHourEntry {
            maintainer: "Ana".to_string(),
            hours: f64::NAN,
        }]));
        assert!(WorkOrder::try_from(r).is_err());
    }

    #[test]
    fn test_logged_hours_ignores_negative_entries() {
        let mut order = WorkOrder::try_from(record()).unwrap();
        order.man_hours.push(ManHourEntry { maintainer: "Rui".to_string(), hours: -6.0 });
        assert_eq!(order.logged_hours(), Some(4.0));
    }

    #[test]
    fn test_invalid_json_value_is_malformed() {
        let bad_date = serde_json::json!({
            "id": "OS-0009",
            "equipment_id": "E1",
            "maintenance_type": 1,
            "status": 2,
            "scheduled_date": "2026-02-30"
        });
        let err = WorkOrder::try_from(bad_date).unwrap_err();
        assert!(matches!(err, MaintenanceError::MalformedRecord { ref id, .. } if id == "OS-0009"));

        let no_type = serde_json::json!({
            "id": "OS-0010",
            "equipment_id": "E1",
            "status": 0,
            "scheduled_date": "2026-02-10"
        });
        assert!(WorkOrder::try_from(no_type).is_err());

        let no_id = serde_json::json!({ "equipment_id": "E1" });
        let err = WorkOrder::try_from(no_id).unwrap_err();
        assert!(matches!(err, MaintenanceError::MalformedRecord { ref id, .. } if id == "<unknown>"));
    }

    #[test]
    fn test_valid_json_value_converts() {
        let value = serde_json::json!({
            "id": "OS-0011",
            "equipment_id": "E1",
            "maintenance_type": 1,
            "status": 2,
            "scheduled_date": "2026-02-10",
            "end_date": "2026-02-11",
            "man_hours": [{ "maintainer": "Ana", "hours": 3.0 }]
        });
        let order = WorkOrder::try_from(value).unwrap();
        assert_eq!(order.logged_hours(), Some(3.0));
        assert_eq!(order.end_date, NaiveDate::from_ymd_opt(2026, 2, 11));
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "id": "OS-0002",
            "equipment_id": "E2",
            "maintenance_type": 0,
            "status": 0,
            "scheduled_date": "2026-03-01"
        }"#;
        let r: WorkOrderRecord = serde_json::from_str(json).unwrap();
        let order = WorkOrder::try_from(r).unwrap();
        assert_eq!(order.logged_hours(), None);
        assert!(!order.is_prepared);
    }
}
