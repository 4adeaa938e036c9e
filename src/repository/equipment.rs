//! Equipment domain methods on Repository

use chrono::Utc;
use sqlx::types::Json;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

impl Repository {
    /// List all equipment
    pub async fn equipment_list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn equipment_get_by_id(&self, id: &str) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Check whether an equipment id is taken
    pub async fn equipment_exists(&self, id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Create equipment
    pub async fn equipment_create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (id, name, location, category, status, is_critical, schedule)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.id.trim())
        .bind(&data.name)
        .bind(&data.location)
        .bind(data.category.unwrap_or_default())
        .bind(data.status.unwrap_or_default())
        .bind(data.is_critical.unwrap_or(false))
        .bind(Json(data.schedule.clone().unwrap_or_default()))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update equipment
    pub async fn equipment_update(&self, id: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.location, "location");
        add_field!(data.category, "category");
        add_field!(data.status, "status");
        add_field!(data.is_critical, "is_critical");
        add_field!(data.schedule, "schedule");

        let query = format!(
            "UPDATE equipment SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.location);
        bind_field!(data.category);
        bind_field!(data.status);
        bind_field!(data.is_critical);
        if let Some(ref schedule) = data.schedule {
            builder = builder.bind(Json(schedule.clone()));
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment (cascade deletes its work orders)
    pub async fn equipment_delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Ids of every legacy schedule task embedded in equipment records
    pub async fn equipment_schedule_task_ids(&self) -> AppResult<Vec<String>> {
        let ids: Vec<Option<String>> = sqlx::query_scalar(
            "SELECT task->>'id' FROM equipment, jsonb_array_elements(schedule) AS task",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ids.into_iter().flatten().collect())
    }
}
