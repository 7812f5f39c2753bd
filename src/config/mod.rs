//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración de base de datos y las variables
//! de entorno del servicio. Todo se resuelve una sola vez al arrancar y se
//! pasa explícitamente a quien lo necesite.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
