pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateScientistCommand, CreateScientistError};
pub use delete::{DeleteScientistCommand, DeleteScientistError};
pub use update::{UpdateScientistCommand, UpdateScientistError};
