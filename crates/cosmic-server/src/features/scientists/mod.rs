//! Scientists feature: the people who fly missions

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateScientistCommand, CreateScientistError, DeleteScientistCommand, DeleteScientistError,
    UpdateScientistCommand, UpdateScientistError,
};
pub use queries::{GetScientistError, GetScientistQuery, ListScientistsError, ListScientistsQuery};
pub use routes::scientists_routes;
