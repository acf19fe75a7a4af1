pub mod command_handler;
pub mod traits;

pub use command_handler::{CommandHandler, RunOutcome};
pub use traits::SolutionFetcher;
