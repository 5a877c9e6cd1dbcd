use serde::Serialize;

/// The four per-step series of a run, each `horizon` long.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunResult {
    pub rewards: Vec<f64>,
    pub average_returns: Vec<f64>,
    pub total_regrets: Vec<f64>,
    pub optimal_actions: Vec<f64>,
}

impl RunResult {
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub(crate) fn zeros(horizon: usize) -> Self {
        Self {
            rewards: vec![0.0; horizon],
            average_returns: vec![0.0; horizon],
            total_regrets: vec![0.0; horizon],
            optimal_actions: vec![0.0; horizon],
        }
    }

    fn series_mut(&mut self) -> [&mut Vec<f64>; 4] {
        [
            &mut self.rewards,
            &mut self.average_returns,
            &mut self.total_regrets,
            &mut self.optimal_actions,
        ]
    }

    fn series(&self) -> [&Vec<f64>; 4] {
        [
            &self.rewards,
            &self.average_returns,
            &self.total_regrets,
            &self.optimal_actions,
        ]
    }

    /// Element-wise sum, used to average runs of equal length.
    pub(crate) fn accumulate(&mut self, other: &RunResult) {
        for (acc, series) in self.series_mut().into_iter().zip(other.series()) {
            acc.iter_mut().zip(series).for_each(|(a, x)| *a += x);
        }
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        for series in self.series_mut() {
            series.iter_mut().for_each(|x| *x *= factor);
        }
    }
}

/// Per-step bookkeeping shared by every policy.
#[derive(Debug)]
pub struct StepRecorder {
    optimal_arm: usize,
    optimal_reward: f64,
    total_reward: f64,
    total_regret: f64,
    optimal_fraction: f64,
    result: RunResult,
}

impl StepRecorder {
    pub fn new(optimal_arm: usize, optimal_reward: f64, horizon: usize) -> Self {
        Self {
            optimal_arm,
            optimal_reward,
            total_reward: 0.0,
            total_regret: 0.0,
            optimal_fraction: 0.0,
            result: RunResult {
                rewards: Vec::with_capacity(horizon),
                average_returns: Vec::with_capacity(horizon),
                total_regrets: Vec::with_capacity(horizon),
                optimal_actions: Vec::with_capacity(horizon),
            },
        }
    }

    pub fn steps(&self) -> usize {
        self.result.len()
    }

    pub fn record(&mut self, arm_id: usize, reward: f64) {
        let steps = (self.steps() + 1) as f64;

        self.total_reward += reward;
        self.total_regret += self.optimal_reward - reward;

        let optimal = if arm_id == self.optimal_arm { 1.0 } else { 0.0 };
        self.optimal_fraction += (optimal - self.optimal_fraction) / steps;

        self.result.rewards.push(reward);
        self.result.average_returns.push(self.total_reward / steps);
        self.result.total_regrets.push(self.total_regret);
        self.result.optimal_actions.push(self.optimal_fraction);
    }

    pub fn into_result(self) -> RunResult {
        self.result
    }
}
