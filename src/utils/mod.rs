//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, validación,
//! extractores HTTP y composición de filtros SQL.

pub mod errors;
pub mod extract;
pub mod filters;
pub mod validation;

pub use errors::{AppError, AppResult};
