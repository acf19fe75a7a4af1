pub mod application;
pub mod cli;
pub mod domain {
    pub mod calendar;
    pub mod solution;
}
pub mod error;
pub mod infrastructure;
pub mod utils {
    pub mod config;
    pub mod env;
    pub mod logging;
}
