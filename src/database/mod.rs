//! Módulo de base de datos
//! 
//! Maneja el esquema y la conexión con SQLite

pub mod connection;
pub mod schema;

pub use connection::{ping, DatabaseConnection};
