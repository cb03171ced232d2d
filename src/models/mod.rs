//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod claim;
pub mod dashboard;
pub mod driver;
pub mod expense;
pub mod insurance;
pub mod insurance_history;
pub mod maintenance;
pub mod vehicle;
