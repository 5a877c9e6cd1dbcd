pub mod arm;
pub mod epsilon_greedy;
pub mod errors;
pub mod gradient;
mod policy;
pub mod rng;
pub mod softmax;
pub mod ucb;

pub use errors::PolicyError;
pub use policy::{Policy, PolicyStats, PolicyType};
pub use rng::MaybeSeededRng;
