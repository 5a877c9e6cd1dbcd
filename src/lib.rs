pub mod config;
pub mod environment;
pub mod errors;
pub mod policies;
pub mod simulation;
