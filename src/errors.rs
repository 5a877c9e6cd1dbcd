use crate::environment::ArmPoolError;
use crate::policies::PolicyError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    ArmPool(#[from] ArmPoolError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("At least one trial is required")]
    ZeroTrials,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
