pub mod create;
pub mod delete;

pub use create::{CreatePlanetCommand, CreatePlanetError};
pub use delete::{DeletePlanetCommand, DeletePlanetError};
