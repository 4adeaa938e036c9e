//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment_list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.repository.equipment_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        if self.repository.equipment_exists(data.id.trim()).await? {
            return Err(AppError::Conflict(format!("Equipment {} already exists", data.id)));
        }
        let equipment = self.repository.equipment_create(data).await?;
        tracing::info!("Created equipment {}", equipment.id);
        Ok(equipment)
    }

    pub async fn update(&self, id: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        self.repository.equipment_update(id, data).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.equipment_delete(id).await?;
        tracing::info!("Deleted equipment {}", id);
        Ok(())
    }
}
