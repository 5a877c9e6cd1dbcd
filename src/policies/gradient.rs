use super::arm::ArmStats;
use super::errors::PolicyError;
use super::policy::{check_arms, check_finite, Policy, PolicyStats, PolicyType};
use super::softmax::{sample_index, softmax};

use rand::rngs::SmallRng;

/// Gradient bandit: softmax over learned preferences, updated by stochastic gradient ascent.
#[derive(Clone, Debug)]
pub struct Gradient {
    preferences: Vec<f64>,
    pulls: Vec<u64>,
    alpha: f64,
    use_baseline: bool,
    baseline: f64,
    total_reward: f64,
    steps: u64,
}

impl Gradient {
    pub fn new(n_arms: usize, alpha: f64, use_baseline: bool) -> Result<Self, PolicyError> {
        check_arms(n_arms)?;
        check_finite("alpha", alpha)?;
        if alpha < 0.0 {
            return Err(PolicyError::invalid("alpha", alpha, "must be non-negative"));
        }

        Ok(Self {
            preferences: vec![0.0; n_arms],
            pulls: vec![0; n_arms],
            alpha,
            use_baseline,
            baseline: 0.0,
            total_reward: 0.0,
            steps: 0,
        })
    }

    pub fn preferences(&self) -> &[f64] {
        &self.preferences
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn probabilities(&self) -> Vec<f64> {
        softmax(&self.preferences, 1.0)
    }
}

impl Policy for Gradient {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Gradient {
            alpha: self.alpha,
            use_baseline: self.use_baseline,
        }
    }

    fn draw(&mut self, _: usize, rng: &mut SmallRng) -> Result<usize, PolicyError> {
        sample_index(&self.probabilities(), rng)
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        if arm_id >= self.preferences.len() {
            return Err(PolicyError::ArmNotFound(arm_id));
        }

        // preferences have not moved since the draw, so these are the selection probabilities
        let probabilities = self.probabilities();

        self.steps += 1;
        self.total_reward += reward;
        self.pulls[arm_id] += 1;
        if self.use_baseline {
            self.baseline = self.total_reward / self.steps as f64;
        }

        let step = self.alpha * (reward - self.baseline);
        self.preferences
            .iter_mut()
            .zip(probabilities)
            .enumerate()
            .for_each(|(index, (preference, probability))| {
                if index == arm_id {
                    *preference += step * (1.0 - probability);
                } else {
                    *preference -= step * probability;
                }
            });

        Ok(())
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self
                .preferences
                .iter()
                .zip(&self.pulls)
                .map(|(&preference, &pulls)| ArmStats {
                    pulls,
                    estimate: preference,
                })
                .collect(),
        }
    }
}
