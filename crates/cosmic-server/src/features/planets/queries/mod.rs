pub mod get;
pub mod list;

pub use get::{GetPlanetError, GetPlanetQuery};
pub use list::{ListPlanetsError, ListPlanetsQuery};
