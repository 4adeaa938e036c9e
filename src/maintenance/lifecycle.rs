//! Work order lifecycle
//!
//! Transitions:
//! - Scheduled -> InField sets `is_prepared`, InField -> Scheduled clears it
//! - any open state -> Executed stamps `end_date` with today
//! - Scheduled/InField <-> WaitingParts
//! - Executed -> an open state reopens the order
//! - every target other than Executed clears `end_date`
//! - anything -> Deactivated, which is terminal
//!
//! `Delayed` is never a target: it is derived from the scheduled date by
//! [`display_status`].

use chrono::NaiveDate;

use super::{Clock, MaintenanceError, MaintenanceResult};
use crate::models::{WorkOrder, WorkOrderStatus};

/// Check that `from -> to` is allowed
pub fn validate_transition(from: WorkOrderStatus, to: WorkOrderStatus) -> MaintenanceResult<()> {
    use WorkOrderStatus::*;

    match (from, to) {
        (Deactivated, _) | (_, Delayed) => Err(MaintenanceError::InvalidTransition { from, to }),
        (current, next) if current == next => Ok(()),
        (Scheduled | InField | WaitingParts | Delayed, Executed) => Ok(()),
        (Scheduled | Delayed, InField) | (InField, Scheduled) => Ok(()),
        (Scheduled | InField | Delayed, WaitingParts) => Ok(()),
        (WaitingParts, Scheduled | InField) => Ok(()),
        (Delayed, Scheduled) => Ok(()),
        (Executed, Scheduled | InField | WaitingParts) => Ok(()),
        (_, Deactivated) => Ok(()),
        (from, to) => Err(MaintenanceError::InvalidTransition { from, to }),
    }
}

/// Apply a transition and its side effects, returning the updated order.
///
/// The input is left untouched; the caller persists the result.
pub fn transition(
    order: &WorkOrder,
    target: WorkOrderStatus,
    clock: &dyn Clock,
) -> MaintenanceResult<WorkOrder> {
    validate_transition(order.status, target)?;

    let mut next = order.clone();
    if order.status != WorkOrderStatus::Executed || target != WorkOrderStatus::Executed {
        next.end_date = None;
    }

    match target {
        WorkOrderStatus::InField => next.is_prepared = true,
        WorkOrderStatus::Scheduled => next.is_prepared = false,
        WorkOrderStatus::Executed => {
            if next.end_date.is_none() {
                next.end_date = Some(clock.today());
            }
        }
        WorkOrderStatus::WaitingParts
        | WorkOrderStatus::Deactivated
        | WorkOrderStatus::Delayed => {}
    }

    next.status = target;
    Ok(next)
}

/// Move an order to `Executed`, using `end_date` when the caller knows it
pub fn complete(
    order: &WorkOrder,
    end_date: Option<NaiveDate>,
    clock: &dyn Clock,
) -> MaintenanceResult<WorkOrder> {
    let mut next = transition(order, WorkOrderStatus::Executed, clock)?;
    if let Some(date) = end_date {
        next.end_date = Some(date);
    }
    Ok(next)
}

/// Status shown to users: `Delayed` for scheduled or in-field orders past due
pub fn display_status(order: &WorkOrder, today: NaiveDate) -> WorkOrderStatus {
    match order.status {
        WorkOrderStatus::Scheduled | WorkOrderStatus::InField if order.scheduled_date < today => {
            WorkOrderStatus::Delayed
        }
        status => status,
    }
}

/// Outcome of [`prepare_batch`]
#[derive(Debug, Default)]
pub struct PreparedBatch {
    pub prepared: Vec<WorkOrder>,
    pub skipped: Vec<String>,
}

/// Hand every scheduled order of a batch to the field
pub fn prepare_batch<'a, I>(orders: I, clock: &dyn Clock) -> PreparedBatch
where
    I: IntoIterator<Item = &'a WorkOrder>,
{
    let mut batch = PreparedBatch::default();
    for order in orders {
        if order.status != WorkOrderStatus::Scheduled {
            batch.skipped.push(order.id.clone());
            continue;
        }
        match transition(order, WorkOrderStatus::InField, clock) {
            Ok(next) => batch.prepared.push(next),
            Err(_) => batch.skipped.push(order.id.clone()),
        }
    }
    batch
}
