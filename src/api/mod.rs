//! API handlers for GMAO REST endpoints

pub mod equipment;
pub mod health;
pub mod openapi;
pub mod reliability;
pub mod work_orders;
