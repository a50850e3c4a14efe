pub mod get;
pub mod list;

pub use get::{GetScientistError, GetScientistQuery};
pub use list::{ListScientistsError, ListScientistsQuery};
