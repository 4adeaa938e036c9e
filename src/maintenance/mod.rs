//! Maintenance core
//!
//! Pure logic shared by the services: the work order lifecycle, the
//! reliability metrics engine and order numbering. Nothing in this module
//! performs I/O; callers feed it in-memory records and persist whatever it
//! returns.

pub mod clock;
pub mod lifecycle;
pub mod numbering;
pub mod reliability;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::WorkOrderStatus;

pub use clock::{Clock, FixedClock, SystemClock};
pub use lifecycle::{display_status, transition};
pub use numbering::next_order_number;
pub use reliability::{MetricsRequest, MetricsWindow};

/// Errors raised by the maintenance core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaintenanceError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: WorkOrderStatus,
        to: WorkOrderStatus,
    },

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Malformed work order {id}: {reason}")]
    MalformedRecord { id: String, reason: String },

    #[error("Unknown {field} code {code}")]
    UnknownCode { field: &'static str, code: i16 },
}

pub type MaintenanceResult<T> = Result<T, MaintenanceError>;
