pub mod get;
pub mod list;

pub use get::{GetMissionError, GetMissionQuery};
pub use list::{ListMissionsError, ListMissionsQuery};
