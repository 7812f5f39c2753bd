//! API REST de seguimiento de transporte público
//! 
//! Rutas, estaciones, horarios y retrasos sobre un fichero SQLite, con
//! búsqueda por subcadena.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
