pub mod create;

pub use create::{CreateMissionCommand, CreateMissionError};
