pub mod errors;

pub use errors::{CommandError, CommandResult, ModError, ModResult};
