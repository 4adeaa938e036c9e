//! Reliability metrics service

use crate::{
    error::{AppError, AppResult},
    maintenance::{reliability, MetricsRequest},
    models::reliability::{ComputeReliabilityRequest, ReliabilityQuery, ReliabilityReport},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReliabilityService {
    repository: Repository,
}

impl ReliabilityService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Report over the stored work orders of the requested equipment
    pub async fn report(&self, query: &ReliabilityQuery) -> AppResult<ReliabilityReport> {
        let ids = query.ids();
        if ids.is_empty() {
            return Err(AppError::Validation("equipment_ids is empty".to_string()));
        }
        let request = MetricsRequest::new(ids, query.start_date, query.end_date)?;

        let records = self
            .repository
            .work_orders_for_equipment(request.equipment_ids())
            .await?;
        let report = reliability::compute_from_records(&request, records);
        if report.skipped_records > 0 {
            tracing::warn!(
                "Reliability report skipped {} malformed work orders",
                report.skipped_records
            );
        }
        Ok(report)
    }

    /// Report over records supplied by the caller
    pub fn compute(&self, data: ComputeReliabilityRequest) -> AppResult<ReliabilityReport> {
        let request = MetricsRequest::new(data.equipment_ids, data.start_date, data.end_date)?;
        let report = reliability::compute_from_records(&request, data.work_orders);
        tracing::debug!(
            "Computed reliability for {} equipment ({} records skipped)",
            report.metrics.len(),
            report.skipped_records
        );
        Ok(report)
    }
}
