//! Acceso a datos
//! 
//! SQL parametrizado por entidad. Cada sentencia toma una conexión del pool
//! y la devuelve al terminar, con éxito o con error.

pub mod delay_repository;
pub mod route_repository;
pub mod schedule_repository;
pub mod station_repository;

pub use delay_repository::DelayRepository;
pub use route_repository::RouteRepository;
pub use schedule_repository::ScheduleRepository;
pub use station_repository::StationRepository;
