//! Planets feature: the destinations missions fly to

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreatePlanetCommand, CreatePlanetError, DeletePlanetCommand, DeletePlanetError,
};
pub use queries::{GetPlanetError, GetPlanetQuery, ListPlanetsError, ListPlanetsQuery};
pub use routes::planets_routes;
