//! Controladores
//! 
//! Orquestan validación, repositorio y mapeo de "no encontrado" para cada recurso.

pub mod delay_controller;
pub mod route_controller;
pub mod schedule_controller;
pub mod search_controller;
pub mod station_controller;

pub use delay_controller::DelayController;
pub use route_controller::RouteController;
pub use schedule_controller::ScheduleController;
pub use search_controller::SearchController;
pub use station_controller::StationController;
