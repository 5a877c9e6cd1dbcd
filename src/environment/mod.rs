pub mod arm;
pub mod errors;

pub use arm::{Arm, ArmPool};
pub use errors::ArmPoolError;
