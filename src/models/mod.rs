//! Modelos del sistema
//! 
//! Filas tal como salen de SQLite, ya con los nombres legibles de rutas y
//! estaciones cuando la consulta hace JOIN.

pub mod delay;
pub mod route;
pub mod schedule;
pub mod station;

pub use delay::{DelayDetail, DelayListItem, NewDelay, ScheduleDelay};
pub use route::{NewRoute, Route, RouteType};
pub use schedule::{NewSchedule, ScheduleMatch, ScheduleView};
pub use station::{NewStation, Station, StationType};
