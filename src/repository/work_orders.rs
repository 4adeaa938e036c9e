//! Work orders domain methods on Repository

use chrono::Utc;
use sqlx::types::Json;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::work_order::{WorkOrder, WorkOrderQuery, WorkOrderRecord},
};

impl Repository {
    /// List work orders, optionally filtered
    pub async fn work_orders_list(&self, query: &WorkOrderQuery) -> AppResult<Vec<WorkOrderRecord>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        macro_rules! add_condition {
            ($field:expr, $clause:literal) => {
                if $field.is_some() {
                    conditions.push(format!($clause, idx));
                    idx += 1;
                }
            };
        }

        add_condition!(query.equipment_id, "equipment_id = ${}");
        add_condition!(query.status, "status = ${}");
        add_condition!(query.maintenance_type, "maintenance_type = ${}");
        add_condition!(query.start_date, "scheduled_date >= ${}");
        add_condition!(query.end_date, "scheduled_date <= ${}");

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT * FROM work_orders {} ORDER BY scheduled_date DESC NULLS LAST, id",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, WorkOrderRecord>(&sql);
        if let Some(ref equipment_id) = query.equipment_id { builder = builder.bind(equipment_id); }
        if let Some(status) = query.status { builder = builder.bind(status); }
        if let Some(kind) = query.maintenance_type { builder = builder.bind(kind); }
        if let Some(sd) = query.start_date { builder = builder.bind(sd); }
        if let Some(ed) = query.end_date { builder = builder.bind(ed); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get a work order by ID
    pub async fn work_orders_get_by_id(&self, id: &str) -> AppResult<WorkOrderRecord> {
        sqlx::query_as::<_, WorkOrderRecord>("SELECT * FROM work_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Work order {} not found", id)))
    }

    /// Get several work orders, in no particular order
    pub async fn work_orders_get_many(&self, ids: &[String]) -> AppResult<Vec<WorkOrderRecord>> {
        let rows = sqlx::query_as::<_, WorkOrderRecord>("SELECT * FROM work_orders WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// All work orders of the given equipment
    pub async fn work_orders_for_equipment(&self, equipment_ids: &[String]) -> AppResult<Vec<WorkOrderRecord>> {
        let rows = sqlx::query_as::<_, WorkOrderRecord>(
            "SELECT * FROM work_orders WHERE equipment_id = ANY($1)",
        )
        .bind(equipment_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Check whether a work order id is taken
    pub async fn work_orders_exists(&self, id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM work_orders WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Ids of every work order
    pub async fn work_orders_list_ids(&self) -> AppResult<Vec<String>> {
        let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM work_orders")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    /// Insert a new work order
    pub async fn work_orders_create(&self, order: &WorkOrder) -> AppResult<WorkOrderRecord> {
        let row = sqlx::query_as::<_, WorkOrderRecord>(
            r#"
            INSERT INTO work_orders (
                id, equipment_id, maintenance_type, status, scheduled_date, started_at,
                end_date, description, checklist, man_hours, is_prepared
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&order.id)
        .bind(&order.equipment_id)
        .bind(i16::from(order.maintenance_type))
        .bind(i16::from(order.status))
        .bind(order.scheduled_date)
        .bind(order.started_at)
        .bind(order.end_date)
        .bind(&order.description)
        .bind(Json(&order.checklist))
        .bind(Json(&order.man_hours))
        .bind(order.is_prepared)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Persist every mutable field of a work order
    pub async fn work_orders_save(&self, order: &WorkOrder) -> AppResult<WorkOrderRecord> {
        sqlx::query_as::<_, WorkOrderRecord>(
            r#"
            UPDATE work_orders SET
                maintenance_type = $2, status = $3, scheduled_date = $4, started_at = $5,
                end_date = $6, description = $7, checklist = $8, man_hours = $9,
                is_prepared = $10, modif_date = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(&order.id)
        .bind(i16::from(order.maintenance_type))
        .bind(i16::from(order.status))
        .bind(order.scheduled_date)
        .bind(order.started_at)
        .bind(order.end_date)
        .bind(&order.description)
        .bind(Json(&order.checklist))
        .bind(Json(&order.man_hours))
        .bind(order.is_prepared)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Work order {} not found", order.id)))
    }

    /// Delete a work order
    pub async fn work_orders_delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM work_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Work order {} not found", id)));
        }
        Ok(())
    }
}
