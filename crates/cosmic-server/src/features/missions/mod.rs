//! Missions feature: a scientist's trip to a planet

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{CreateMissionCommand, CreateMissionError};
pub use queries::{GetMissionError, GetMissionQuery, ListMissionsError, ListMissionsQuery};
pub use routes::missions_routes;
