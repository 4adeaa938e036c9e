//! Reliability metrics engine
//!
//! Derives MTBF, MTTR and availability from the executed corrective work
//! orders of each equipment over an inclusive calendar window.

use std::cmp::Reverse;

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::{MaintenanceError, MaintenanceResult};
use crate::models::{ReliabilityMetrics, ReliabilityReport, WorkOrder, WorkOrderStatus};

const HOURS_PER_DAY: f64 = 24.0;

/// Inclusive calendar window `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl MetricsWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> MaintenanceResult<Self> {
        if start > end {
            return Err(MaintenanceError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Window length in hours, both bounds included
    pub fn hours(&self) -> f64 {
        ((self.end - self.start).num_days() + 1) as f64 * HOURS_PER_DAY
    }

    /// Whether `[from, to]` intersects the window
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        from <= self.end && to >= self.start
    }
}

/// Equipment set and window of a metrics computation
#[derive(Debug, Clone)]
pub struct MetricsRequest {
    equipment_ids: Vec<String>,
    window: MetricsWindow,
}

impl MetricsRequest {
    /// Build a request, dropping duplicate ids while keeping their first position
    pub fn new<I, S>(equipment_ids: I, start: NaiveDate, end: NaiveDate) -> MaintenanceResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let window = MetricsWindow::new(start, end)?;
        let mut ids: Vec<String> = Vec::new();
        for id in equipment_ids {
            let id = id.into();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(Self {
            equipment_ids: ids,
            window,
        })
    }

    pub fn equipment_ids(&self) -> &[String] {
        &self.equipment_ids
    }

    pub fn window(&self) -> MetricsWindow {
        self.window
    }
}

/// Date the failure was closed; executed orders missing one fall back to the scheduled date
fn completion_date(order: &WorkOrder) -> NaiveDate {
    order.end_date.unwrap_or(order.scheduled_date)
}

/// Hours spent repairing one failure.
///
/// Logged man-hours win; without any entry the repair lasted from the
/// scheduled date to the completion date, in whole days.
pub fn repair_hours(order: &WorkOrder) -> f64 {
    match order.logged_hours() {
        Some(hours) => hours,
        None => {
            let days = (completion_date(order) - order.scheduled_date).num_days().max(0);
            days as f64 * HOURS_PER_DAY
        }
    }
}

/// Whether an order counts as a failure event inside the window
pub fn is_qualifying_failure(order: &WorkOrder, window: &MetricsWindow) -> bool {
    order.status == WorkOrderStatus::Executed
        && order.maintenance_type.is_failure()
        && window.overlaps(order.scheduled_date, completion_date(order))
}

/// Aggregate the metrics of one equipment from its qualifying failures
fn aggregate<'a, I>(failures: I, window: &MetricsWindow) -> ReliabilityMetrics
where
    I: IntoIterator<Item = &'a WorkOrder>,
{
    let (count, repair) = failures
        .into_iter()
        .fold((0u32, 0.0f64), |(n, hours), o| (n + 1, hours + repair_hours(o)));

    if count == 0 {
        return ReliabilityMetrics::no_failures();
    }

    let p = f64::from(count);
    let uptime = (window.hours() - repair).max(0.0);
    let mtbf = uptime / p;
    let mttr = repair / p;
    let availability = if mtbf + mttr > 0.0 {
        (mtbf / (mtbf + mttr) * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    };

    ReliabilityMetrics {
        mtbf: Some(mtbf),
        mttr,
        availability,
        total_failures: count,
        total_corrective_hours: repair,
    }
}

/// Compute one metrics record per requested equipment, plus the qualifying
/// failures sorted by completion date, most recent first.
pub fn compute(request: &MetricsRequest, orders: &[WorkOrder]) -> ReliabilityReport {
    let window = request.window();
    let mut failures: Vec<&WorkOrder> = orders
        .iter()
        .filter(|o| request.equipment_ids.contains(&o.equipment_id))
        .filter(|o| is_qualifying_failure(o, &window))
        .collect();

    let metrics: IndexMap<String, ReliabilityMetrics> = request
        .equipment_ids
        .iter()
        .map(|id| {
            let own = failures.iter().copied().filter(|o| &o.equipment_id == id);
            (id.clone(), aggregate(own, &window))
        })
        .collect();

    failures.sort_by_key(|o| Reverse(completion_date(o)));

    ReliabilityReport {
        start_date: window.start(),
        end_date: window.end(),
        metrics,
        failures: failures.into_iter().cloned().collect(),
        skipped_records: 0,
    }
}

/// Same as [`compute`] over loose records (stored rows or raw JSON values);
/// malformed ones are skipped and counted
pub fn compute_from_records<I>(request: &MetricsRequest, records: I) -> ReliabilityReport
where
    I: IntoIterator,
    I::Item: TryInto<WorkOrder, Error = MaintenanceError>,
{
    let mut skipped = 0;
    let orders: Vec<WorkOrder> = records
        .into_iter()
        .filter_map(|r| match r.try_into() {
            Ok(order) => Some(order),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();

    let mut report = compute(request, &orders);
    report.skipped_records = skipped;
    report
}
