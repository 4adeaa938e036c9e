//! Data models for GMAO

pub mod enums;
pub mod equipment;
pub mod reliability;
pub mod work_order;

// Re-export commonly used types
pub use enums::{EquipmentCategory, EquipmentStatus, MaintenanceType, WorkOrderStatus};
pub use equipment::{Equipment, ScheduleTask};
pub use reliability::{ReliabilityMetrics, ReliabilityReport};
pub use work_order::{ChecklistItem, ManHourEntry, WorkOrder, WorkOrderRecord, WorkOrderView};
