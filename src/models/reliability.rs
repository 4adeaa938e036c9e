//! Reliability metrics (derived, never stored)

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::work_order::{WorkOrder, WorkOrderRecord};

/// Reliability figures for one equipment over a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReliabilityMetrics {
    /// Mean time between failures in hours, `null` without failures
    pub mtbf: Option<f64>,
    /// Mean time to repair in hours
    pub mttr: f64,
    /// Availability percentage (0-100)
    pub availability: f64,
    pub total_failures: u32,
    pub total_corrective_hours: f64,
}

impl ReliabilityMetrics {
    /// Metrics of an equipment without any failure in the window
    pub fn no_failures() -> Self {
        Self {
            mtbf: None,
            mttr: 0.0,
            availability: 100.0,
            total_failures: 0,
            total_corrective_hours: 0.0,
        }
    }
}

/// Reliability report for a set of equipment
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReliabilityReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Metrics keyed by equipment id, in request order
    #[schema(value_type = Object)]
    pub metrics: IndexMap<String, ReliabilityMetrics>,
    /// Qualifying executed orders, most recent completion first
    pub failures: Vec<WorkOrder>,
    /// Records excluded because required fields were missing or invalid
    pub skipped_records: usize,
}

/// Query parameters for GET /reliability
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ReliabilityQuery {
    /// Comma separated equipment ids
    pub equipment_ids: String,
    /// Window start (YYYY-MM-DD, inclusive)
    pub start_date: NaiveDate,
    /// Window end (YYYY-MM-DD, inclusive)
    pub end_date: NaiveDate,
}

impl ReliabilityQuery {
    pub fn ids(&self) -> Vec<String> {
        self.equipment_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Body of POST /reliability/compute
#[derive(Debug, Deserialize, ToSchema)]
pub struct ComputeReliabilityRequest {
    pub equipment_ids: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Work order records; entries that do not parse are skipped and counted
    #[schema(value_type = Vec<WorkOrderRecord>)]
    pub work_orders: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_ids() {
        let q = ReliabilityQuery {
            equipment_ids: "E1, E2,,E3 ".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        };
        assert_eq!(q.ids(), vec!["E1", "E2", "E3"]);
    }

    #[test]
    fn test_compute_body_accepts_unparseable_records() {
        let body = serde_json::json!({
            "equipment_ids": ["E1"],
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "work_orders": [
                {
                    "id": "OS-0001",
                    "equipment_id": "E1",
                    "maintenance_type": 1,
                    "status": 2,
                    "scheduled_date": "2026-01-10",
                    "end_date": "2026-01-10",
                    "man_hours": [{ "maintainer": "Ana", "hours": 4.0 }]
                },
                {
                    "id": "OS-0002",
                    "equipment_id": "E1",
                    "maintenance_type": 1,
                    "status": 2,
                    "scheduled_date": "2026-02-30"
                }
            ]
        });
        let request: ComputeReliabilityRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.work_orders.len(), 2);
    }

    #[test]
    fn test_no_failures_serializes_null_mtbf() {
        let json = serde_json::to_value(ReliabilityMetrics::no_failures()).unwrap();
        assert!(json["mtbf"].is_null());
        assert_eq!(json["availability"], 100.0);
    }
}
