//! Business logic services

pub mod equipment;
pub mod reliability;
pub mod work_orders;

use std::sync::Arc;

use crate::{config::WorkOrdersConfig, maintenance::Clock, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub equipment: equipment::EquipmentService,
    pub work_orders: work_orders::WorkOrdersService,
    pub reliability: reliability::ReliabilityService,
}

impl Services {
    /// Create all services with the given repository and time source
    pub fn new(
        repository: Repository,
        work_orders_config: WorkOrdersConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            work_orders: work_orders::WorkOrdersService::new(
                repository.clone(),
                work_orders_config,
                clock,
            ),
            reliability: reliability::ReliabilityService::new(repository.clone()),
            repository,
        }
    }
}
