use super::arm::{argmax, ValueArm, ValueArms};
use super::errors::PolicyError;
use super::policy::{check_arms, check_finite, Policy, PolicyStats, PolicyType};

use rand::rngs::SmallRng;

#[derive(Clone, Debug)]
pub struct Ucb {
    arms: ValueArms,
    c: f64,
    initial_value: f64,
}

impl Ucb {
    pub fn new(n_arms: usize, c: f64, initial_value: f64) -> Result<Self, PolicyError> {
        check_arms(n_arms)?;
        check_finite("c", c)?;
        check_finite("initial_value", initial_value)?;
        if c < 0.0 {
            return Err(PolicyError::invalid("c", c, "must be non-negative"));
        }

        Ok(Self {
            arms: vec![ValueArm::new(initial_value); n_arms],
            c,
            initial_value,
        })
    }

    /// Upper bound of an explored arm at the 1-indexed step `t`.
    fn upper_bound(&self, arm: &ValueArm, t: f64) -> f64 {
        arm.value + self.c * (t.ln() / arm.pulls as f64).sqrt()
    }
}

impl Policy for Ucb {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Ucb {
            c: self.c,
            initial_value: self.initial_value,
        }
    }

    fn draw(&mut self, step: usize, _: &mut SmallRng) -> Result<usize, PolicyError> {
        // every arm is pulled once, in index order, before any bound is computed
        if let Some(arm_id) = self.arms.iter().position(|arm| arm.pulls == 0) {
            return Ok(arm_id);
        }

        let t = (step + 1) as f64;
        argmax(self.arms.iter().map(|arm| self.upper_bound(arm, t)))
            .ok_or(PolicyError::NoArmsAvailable)
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
    use crate::policies::arm::ArmStats;
    use rand::SeedableRng;

    const SEED: u64 = 1234;

    #[test]
    fn invalid_c() {
        assert!(Ucb::new(3, -1.0, 0.0).is_err());
        assert!(Ucb::new(3, f64::INFINITY, 0.0).is_err());
        assert!(Ucb::new(3, 0.0, 0.0).is_ok());
    }

    #[test]
    fn first_pass_in_index_order() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        for c in [0.0, 0.5, 2.0] {
            let mut policy = Ucb::new(4, c, 1.0).unwrap();
            for step in 0..4 {
                let arm_id = policy.draw(step, &mut rng).unwrap();
                assert_eq!(arm_id, step);
                // rewards must not reorder the first pass
                policy.update(arm_id, (step % 2) as f64).unwrap();
            }
        }
    }

    #[test]
    fn draw_best() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let mut policy = Ucb::new(2, 1.0, 0.0).unwrap();

        policy.update(0, 1.0).unwrap();
        policy.update(1, 0.0).unwrap();
        assert_eq!(policy.draw(2, &mut rng), Ok(0));
    }

    #[test]
    fn bonus_favours_rarely_pulled_arm() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let mut policy = Ucb::new(2, 2.0, 0.0).unwrap();

        policy.arms[0].value = 0.6;
        policy.arms[0].pulls = 100;
        policy.arms[1].value = 0.5;
        policy.arms[1].pulls = 1;
        assert_eq!(policy.draw(100, &mut rng), Ok(1));
    }

    #[test]
    fn zero_c_is_greedy() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let mut policy = Ucb::new(3, 0.0, 0.0).unwrap();

        policy.arms.iter_mut().for_each(|arm| arm.pulls = 1);
        policy.arms[0].pulls = 1000;
        policy.arms[1].value = 0.3;
        policy.arms[2].value = 0.3;
        assert_eq!(policy.draw(1002, &mut rng), Ok(1));
    }

    #[test]
    fn update() {
        let mut policy = Ucb::new(2, 1.0, 0.0).unwrap();

        assert!(policy.update(1, 1.0).is_ok());
        assert_eq!(
            policy.stats().arms[1],
            ArmStats {
                pulls: 1,
                estimate: 1.0
            }
        );
        assert!(policy.update(5, 1.0).is_err());
    }
}
