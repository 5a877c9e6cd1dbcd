use serde::Serialize;

/// Sample-average estimate of an arm's value.
#[derive(Clone, Debug, Serialize)]
pub struct ValueArm {
    pub(super) value: f64,
    pub(super) pulls: u64,
}

pub type ValueArms = Vec<ValueArm>;

impl ValueArm {
    pub fn new(initial_value: f64) -> Self {
        Self {
            value: initial_value,
            pulls: 0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn pulls(&self) -> u64 {
        self.pulls
    }

    pub fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.value += (reward - self.value) / (self.pulls as f64);
    }

    pub fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            estimate: self.value,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ArmStats {
    pub pulls: u64,
    pub estimate: f64,
}

/// Index of the largest value. Ties go to the lowest index.
pub(super) fn argmax<I: IntoIterator<Item = f64>>(values: I) -> Option<usize> {
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((index, value)),
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremental_mean() {
        let mut arm = ValueArm::new(0.5);
        arm.update(1.0);
        assert_eq!(arm.value(), 1.0);
        arm.update(0.0);
        assert_eq!(arm.value(), 0.5);
        arm.update(1.0);
        assert!((arm.value() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(arm.pulls(), 3);
    }

    #[test]
    fn argmax_ties() {
        assert_eq!(argmax([0.1, 0.7, 0.7, 0.2]), Some(1));
        assert_eq!(argmax([0.0, 0.0]), Some(0));
        assert_eq!(argmax(Vec::<f64>::new()), None);
        assert_eq!(argmax([f64::INFINITY, 1.0, f64::INFINITY]), Some(0));
    }
}
