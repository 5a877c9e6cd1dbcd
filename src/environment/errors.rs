use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArmPoolError {
    #[error("Arm {index} out of range for a pool of {len} arms")]
    InvalidIndex { index: usize, len: usize },
    #[error("Arm {index} has invalid success probability {probability}")]
    InvalidProbability { index: usize, probability: f64 },
    #[error("Arm pool needs at least one arm")]
    NoArms,
}
