use super::arm::{argmax, ValueArm, ValueArms};
use super::errors::PolicyError;
use super::policy::{check_arms, check_finite, Policy, PolicyStats, PolicyType};

use rand::{rngs::SmallRng, Rng};

#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    arms: ValueArms,
    epsilon: f64,
    initial_value: f64,
}

impl EpsilonGreedy {
    pub fn new(n_arms: usize, epsilon: f64, initial_value: f64) -> Result<Self, PolicyError> {
        check_arms(n_arms)?;
        check_finite("initial_value", initial_value)?;
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::invalid(
                "epsilon",
                epsilon,
                "must be a probability in [0, 1]",
            ));
        }

        Ok(Self {
            arms: vec![ValueArm::new(initial_value); n_arms],
            epsilon,
            initial_value,
        })
    }
}

impl Policy for EpsilonGreedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::EpsilonGreedy {
            epsilon: self.epsilon,
            initial_value: self.initial_value,
        }
    }

    fn draw(&mut self, _: usize, rng: &mut SmallRng) -> Result<usize, PolicyError> {
        if rng.random::<f64>() < self.epsilon {
            Ok(rng.random_range(0..self.arms.len()))
        } else {
            argmax(self.arms.iter().map(ValueArm::value)).ok_or(PolicyError::NoArmsAvailable)
        }
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        self.arms
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?
            .update(reward);

        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(ValueArm::stats).collect(),
        }
    }
}
