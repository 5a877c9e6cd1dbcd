use super::arm::{ValueArm, ValueArms};
use super::errors::PolicyError;
use super::policy::{check_arms, check_finite, Policy, PolicyStats, PolicyType};

use rand::{rngs::SmallRng, Rng};

/// Boltzmann distribution over `values` at temperature `tau`.
///
/// Scores are shifted by their maximum before exponentiation, so the
/// leading arm always weighs 1 and small temperatures underflow to 0
/// instead of overflowing.
pub fn softmax(values: &[f64], tau: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let weights: Vec<f64> = values
        .iter()
        .map(|value| ((value - max) / tau).exp())
        .collect();
    let total: f64 = weights.iter().sum();

    weights.into_iter().map(|weight| weight / total).collect()
}

/// Draws one index from a categorical distribution with a single uniform variate.
pub(super) fn sample_index(
    probabilities: &[f64],
    rng: &mut SmallRng,
) -> Result<usize, PolicyError> {
    if probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(PolicyError::SamplingError(format!(
            "invalid probabilities {probabilities:?}"
        )));
    }

    let u = rng.random::<f64>();
    let mut cumulative = 0.0;
    for (index, probability) in probabilities.iter().enumerate() {
        cumulative += probability;
        if u < cumulative {
            return Ok(index);
        }
    }

    // rounding left u above the final cumulative sum
    probabilities
        .iter()
        .rposition(|&p| p > 0.0)
        .ok_or(PolicyError::NoArmsAvailable)
}

#[derive(Clone, Debug)]
pub struct Softmax {
    arms: ValueArms,
    tau: f64,
    initial_value: f64,
}

impl Softmax {
    pub fn new(n_arms: usize, tau: f64, initial_value: f64) -> Result<Self, PolicyError> {
        check_arms(n_arms)?;
        check_finite("tau", tau)?;
        check_finite("initial_value", initial_value)?;
        if tau <= 0.0 {
            return Err(PolicyError::invalid("tau", tau, "must be strictly positive"));
        }

        Ok(Self {
            arms: vec![ValueArm::new(initial_value); n_arms],
            tau,
            initial_value,
        })
    }

    pub fn probabilities(&self) -> Vec<f64> {
        let values: Vec<f64> = self.arms.iter().map(ValueArm::value).collect();
        softmax(&values, self.tau)
    }
}

impl Policy for Softmax {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Softmax {
            tau: self.tau,
            initial_value: self.initial_value,
        }
    }

    fn draw(&mut self, _: usize, rng: &mut SmallRng) -> Result<usize, PolicyError> {
        sample_index(&self.probabilities(), rng)
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SEED: u64 = 1234;

    fn assert_distribution(probabilities: &[f64]) {
        let total: f64 = probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "sum was {total}");
        assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn invalid_tau() {
        assert!(Softmax::new(3, 0.0, 0.0).is_err());
        assert!(Softmax::new(3, -1.0, 0.0).is_err());
        assert!(Softmax::new(3, f64::NAN, 0.0).is_err());
        assert!(Softmax::new(3, 0.1, 0.0).is_ok());
    }

    #[test]
    fn softmax_sums_to_one() {
        for tau in [0.01, 0.1, 1.0, 10.0] {
            assert_distribution(&softmax(&[0.35, 0.6, 0.1], tau));
        }
    }

    #[test]
    fn softmax_uniform_on_equal_values() {
        let probabilities = softmax(&[0.5; 4], 0.1);
        assert!(probabilities.iter().all(|p| (p - 0.25).abs() < 1e-12));
    }

    #[test]
    fn softmax_tiny_tau_concentrates() {
        let probabilities = softmax(&[0.5, 0.6, 0.1], 1e-300);
        assert_eq!(probabilities, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn softmax_large_tau_flattens() {
        let probabilities = softmax(&[0.0, 1.0], 1e6);
        assert!((probabilities[0] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn sample_index_follows_probabilities() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let probabilities = [0.2, 0.0, 0.8];

        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[sample_index(&probabilities, &mut rng).unwrap()] += 1;
        }
        assert_eq!(counts[1], 0);
        assert!((counts[2] as f64 / 10_000.0 - 0.8).abs() < 0.03);
    }

    #[test]
    fn sample_index_rejects_nan() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        assert!(matches!(
            sample_index(&[f64::NAN, 0.5], &mut rng),
            Err(PolicyError::SamplingError(_))
        ));
    }

    #[test]
    fn draw_low_temperature_is_greedy() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let mut policy = Softmax::new(3, 1e-4, 0.0).unwrap();

        policy.update(1, 1.0).unwrap();
        policy.update(0, 0.0).unwrap();
        assert_distribution(&policy.probabilities());
        for step in 0..50 {
            assert_eq!(policy.draw(step, &mut rng), Ok(1));
        }
    }

    #[test]
    fn update() {
        let mut policy = Softmax::new(2, 1.0, 0.5).unwrap();
        policy.update(0, 1.0).unwrap();
        assert_eq!(policy.stats().arms[0].estimate, 1.0);
        assert!(policy.probabilities()[0] > policy.probabilities()[1]);
        assert!(policy.update(2, 1.0).is_err());
    }
}
