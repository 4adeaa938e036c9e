//! Work order management service

use std::sync::Arc;

use validator::Validate;

use crate::{
    config::WorkOrdersConfig,
    error::{AppError, AppResult},
    maintenance::{lifecycle, next_order_number, Clock},
    models::{
        work_order::{
            CreateWorkOrder, NextNumberResponse, PrepareResponse, TransitionRequest,
            UpdateWorkOrder, WorkOrderQuery,
        },
        WorkOrder, WorkOrderRecord, WorkOrderStatus, WorkOrderView,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct WorkOrdersService {
    repository: Repository,
    config: WorkOrdersConfig,
    clock: Arc<dyn Clock>,
}

impl WorkOrdersService {
    pub fn new(repository: Repository, config: WorkOrdersConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            config,
            clock,
        }
    }

    fn view(&self, order: WorkOrder) -> WorkOrderView {
        let display_status = lifecycle::display_status(&order, self.clock.today());
        WorkOrderView {
            order,
            display_status,
        }
    }

    async fn load(&self, id: &str) -> AppResult<WorkOrder> {
        let record = self.repository.work_orders_get_by_id(id).await?;
        Ok(WorkOrder::try_from(record)?)
    }

    async fn save(&self, order: &WorkOrder) -> AppResult<WorkOrder> {
        let record = self.repository.work_orders_save(order).await?;
        Ok(WorkOrder::try_from(record)?)
    }

    /// List work orders with their display status; malformed rows are left out
    pub async fn list(&self, query: &WorkOrderQuery) -> AppResult<Vec<WorkOrderView>> {
        let records = self.repository.work_orders_list(query).await?;
        let mut views = Vec::with_capacity(records.len());
        for record in records {
            match WorkOrder::try_from(record) {
                Ok(order) => views.push(self.view(order)),
                Err(e) => tracing::warn!("Skipping work order: {}", e),
            }
        }
        Ok(views)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<WorkOrderView> {
        let order = self.load(id).await?;
        Ok(self.view(order))
    }

    /// Next free order number across work orders and legacy schedule tasks
    pub async fn next_number(&self) -> AppResult<NextNumberResponse> {
        let mut ids = self.repository.work_orders_list_ids().await?;
        ids.extend(self.repository.equipment_schedule_task_ids().await?);
        let number = next_order_number(&ids);
        Ok(NextNumberResponse {
            id: format!("{}{}", self.config.number_prefix, number),
            number,
        })
    }

    /// Create a work order in the `scheduled` state
    pub async fn create(&self, data: CreateWorkOrder) -> AppResult<WorkOrderView> {
        data.validate()?;

        // The owning equipment must exist
        self.repository.equipment_get_by_id(&data.equipment_id).await?;

        let id = match data.id {
            Some(id) => {
                let id = id.trim().to_string();
                if self.repository.work_orders_exists(&id).await? {
                    return Err(AppError::Conflict(format!("Work order {} already exists", id)));
                }
                id
            }
            None => self.next_number().await?.id,
        };

        let order = WorkOrder {
            id,
            equipment_id: data.equipment_id,
            maintenance_type: data.maintenance_type,
            status: WorkOrderStatus::Scheduled,
            scheduled_date: data.scheduled_date,
            started_at: None,
            end_date: None,
            description: data.description,
            checklist: data.checklist.unwrap_or_default(),
            man_hours: data.man_hours.unwrap_or_default(),
            is_prepared: false,
            crea_date: None,
            modif_date: None,
        };

        let record = self.repository.work_orders_create(&order).await?;
        let created = WorkOrder::try_from(record)?;
        tracing::info!("Created work order {} for equipment {}", created.id, created.equipment_id);
        Ok(self.view(created))
    }

    /// Update the non-lifecycle fields of a work order
    pub async fn update(&self, id: &str, data: UpdateWorkOrder) -> AppResult<WorkOrderView> {
        data.validate()?;
        let mut order = self.load(id).await?;
        if order.status == WorkOrderStatus::Deactivated {
            return Err(AppError::Conflict(format!("Work order {} is deactivated", id)));
        }

        if let Some(kind) = data.maintenance_type { order.maintenance_type = kind; }
        if let Some(date) = data.scheduled_date { order.scheduled_date = date; }
        if let Some(started) = data.started_at { order.started_at = Some(started); }
        if let Some(description) = data.description { order.description = Some(description); }
        if let Some(checklist) = data.checklist { order.checklist = checklist; }
        if let Some(man_hours) = data.man_hours { order.man_hours = man_hours; }

        let saved = self.save(&order).await?;
        Ok(self.view(saved))
    }

    /// Apply a lifecycle transition and persist the result
    pub async fn transition(&self, id: &str, request: TransitionRequest) -> AppResult<WorkOrderView> {
        let order = self.load(id).await?;
        let next = match request.status {
            WorkOrderStatus::Executed => {
                lifecycle::complete(&order, request.end_date, self.clock.as_ref())?
            }
            target => lifecycle::transition(&order, target, self.clock.as_ref())?,
        };

        let saved = self.save(&next).await?;
        tracing::info!("Work order {}: {} -> {}", id, order.status, saved.status);
        Ok(self.view(saved))
    }

    /// Hand a batch of scheduled orders to the field
    pub async fn prepare(&self, ids: &[String]) -> AppResult<PrepareResponse> {
        let records: Vec<WorkOrderRecord> = self.repository.work_orders_get_many(ids).await?;

        let mut orders = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        for record in records {
            let record_id = record.id.clone();
            match WorkOrder::try_from(record) {
                Ok(order) => orders.push(order),
                Err(e) => {
                    tracing::warn!("Cannot prepare work order: {}", e);
                    skipped.push(record_id);
                }
            }
        }
        for id in ids {
            if !orders.iter().any(|o| &o.id == id) && !skipped.contains(id) {
                skipped.push(id.clone());
            }
        }

        let batch = lifecycle::prepare_batch(&orders, self.clock.as_ref());
        skipped.extend(batch.skipped);

        let mut prepared = Vec::with_capacity(batch.prepared.len());
        for order in &batch.prepared {
            prepared.push(self.save(order).await?);
        }
        tracing::info!("Prepared {} work orders, skipped {}", prepared.len(), skipped.len());

        Ok(PrepareResponse { prepared, skipped })
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.work_orders_delete(id).await?;
        tracing::info!("Deleted work order {}", id);
        Ok(())
    }
}
