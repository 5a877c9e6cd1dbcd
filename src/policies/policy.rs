use super::arm::ArmStats;
use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;
use super::gradient::Gradient;
use super::softmax::Softmax;
use super::ucb::Ucb;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PolicyStats {
    pub arms: Vec<ArmStats>,
}

fn default_use_baseline() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    EpsilonGreedy {
        epsilon: f64,
        #[serde(default)]
        initial_value: f64,
    },
    Ucb {
        c: f64,
        #[serde(default)]
        initial_value: f64,
    },
    Softmax {
        tau: f64,
        #[serde(default)]
        initial_value: f64,
    },
    Gradient {
        alpha: f64,
        #[serde(default = "default_use_baseline")]
        use_baseline: bool,
    },
}

impl PolicyType {
    /// Builds a fresh policy state for `n_arms` arms, rejecting out-of-domain parameters.
    pub fn into_inner(self, n_arms: usize) -> Result<Box<dyn Policy + Send>, PolicyError> {
        let policy: Box<dyn Policy + Send> = match self {
            PolicyType::EpsilonGreedy {
                epsilon,
                initial_value,
            } => Box::new(EpsilonGreedy::new(n_arms, epsilon, initial_value)?),
            PolicyType::Ucb { c, initial_value } => Box::new(Ucb::new(n_arms, c, initial_value)?),
            PolicyType::Softmax { tau, initial_value } => {
                Box::new(Softmax::new(n_arms, tau, initial_value)?)
            }
            PolicyType::Gradient {
                alpha,
                use_baseline,
            } => Box::new(Gradient::new(n_arms, alpha, use_baseline)?),
        };

        Ok(policy)
    }

    pub fn label(&self) -> String {
        match self {
            PolicyType::EpsilonGreedy {
                epsilon,
                initial_value,
            } => format!("eps_greedy-eps={epsilon}-init_val={initial_value}"),
            PolicyType::Ucb { c, initial_value } => format!("ucb-c={c}-init_val={initial_value}"),
            PolicyType::Softmax { tau, initial_value } => {
                format!("boltzmann-tau={tau}-init_val={initial_value}")
            }
            PolicyType::Gradient {
                alpha,
                use_baseline,
            } => format!("gradient_bandit-alpha={alpha}-use_baseline={use_baseline}"),
        }
    }
}

/// One decision-and-update algorithm. A policy is owned by a single run and never reused.
pub trait Policy: Send {
    fn policy_type(&self) -> PolicyType;
    /// Picks an arm for the 0-indexed `step`.
    fn draw(&mut self, step: usize, rng: &mut SmallRng) -> Result<usize, PolicyError>;
    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError>;
    fn stats(&self) -> PolicyStats;
}

pub(super) fn check_arms(n_arms: usize) -> Result<(), PolicyError> {
    if n_arms == 0 {
        Err(PolicyError::NoArmsAvailable)
    } else {
        Ok(())
    }
}

pub(super) fn check_finite(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PolicyError::invalid(name, value, "must be finite"))
    }
}
