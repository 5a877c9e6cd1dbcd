use super::errors::ArmPoolError;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// A Bernoulli arm. The success probability is fixed at creation, only the counters move.
#[derive(Clone, Debug, Serialize)]
pub struct Arm {
    id: usize,
    true_probability: f64,
    pulls: u64,
    successes: u64,
}

impl Arm {
    fn new(id: usize, true_probability: f64) -> Self {
        Self {
            id,
            true_probability,
            pulls: 0,
            successes: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn true_probability(&self) -> f64 {
        self.true_probability
    }

    pub fn pulls(&self) -> u64 {
        self.pulls
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    fn reset(&mut self) {
        self.pulls = 0;
        self.successes = 0;
    }

    fn pull<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let success = rng.random::<f64>() < self.true_probability;

        self.pulls += 1;
        if success {
            self.successes += 1;
            1.0
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ArmPool {
    arms: Vec<Arm>,
    horizon: usize,
}

impl ArmPool {
    pub fn new(probabilities: &[f64], horizon: usize) -> Result<Self, ArmPoolError> {
        if probabilities.is_empty() {
            return Err(ArmPoolError::NoArms);
        }

        let arms = probabilities
            .iter()
            .enumerate()
            .map(|(index, &probability)| {
                if probability.is_finite() && (0.0..=1.0).contains(&probability) {
                    Ok(Arm::new(index, probability))
                } else {
                    Err(ArmPoolError::InvalidProbability { index, probability })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { arms, horizon })
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    pub fn arm(&self, index: usize) -> Result<&Arm, ArmPoolError> {
        self.arms.get(index).ok_or(ArmPoolError::InvalidIndex {
            index,
            len: self.arms.len(),
        })
    }

    pub fn reset(&mut self) {
        debug!(arms = self.arms.len(), "Resetting arm pool");
        self.arms.iter_mut().for_each(Arm::reset);
    }

    pub fn pull<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<f64, ArmPoolError> {
        let len = self.arms.len();
        self.arms
            .get_mut(index)
            .map(|arm| arm.pull(rng))
            .ok_or(ArmPoolError::InvalidIndex { index, len })
    }

    /// Index and probability of the best arm. Ties go to the lowest index.
    pub fn optimal_arm(&self) -> (usize, f64) {
        self.arms.iter().fold((0, f64::NEG_INFINITY), |best, arm| {
            if arm.true_probability > best.1 {
                (arm.id, arm.true_probability)
            } else {
                best
            }
        })
    }
}
