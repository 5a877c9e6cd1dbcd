use super::recorder::RunResult;
use super::runner::run;

use crate::environment::ArmPool;
use crate::errors::SimulationError;
use crate::policies::{MaybeSeededRng, PolicyType};

use serde::Serialize;
use tracing::info;

/// Series averaged element-wise over independent runs.
#[derive(Clone, Debug, Serialize)]
pub struct TrialSummary {
    pub label: String,
    pub trials: usize,
    pub result: RunResult,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinalMetrics {
    pub label: String,
    pub average_return: f64,
    pub total_regret: f64,
    pub optimal_action: f64,
}

impl TrialSummary {
    pub fn final_metrics(&self) -> Option<FinalMetrics> {
        let last = self.result.len().checked_sub(1)?;
        Some(FinalMetrics {
            label: self.label.clone(),
            average_return: self.result.average_returns[last],
            total_regret: self.result.total_regrets[last],
            optimal_action: self.result.optimal_actions[last],
        })
    }
}

/// Runs `trials` independent runs of `policy_type` over the pool's horizon and averages them.
///
/// Trial `i` draws from its own stream seeded with `seed + i`.
pub fn run_trials(
    pool: &mut ArmPool,
    policy_type: &PolicyType,
    trials: usize,
    seed: Option<u64>,
) -> Result<TrialSummary, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::ZeroTrials);
    }

    let horizon = pool.horizon();
    let mut total = RunResult::zeros(horizon);
    for trial in 0..trials {
        let mut rng = MaybeSeededRng::for_trial(seed, trial as u64);
        let result = run(pool, horizon, policy_type, rng.get_rng())?;
        total.accumulate(&result);
    }
    total.scale(1.0 / trials as f64);

    let summary = TrialSummary {
        label: policy_type.label(),
        trials,
        result: total,
    };

    if let Some(metrics) = summary.final_metrics() {
        info!(
            policy = %metrics.label,
            trials,
            average_return = metrics.average_return,
            total_regret = metrics.total_regret,
            optimal_action = metrics.optimal_action,
            "Finished trials"
        );
    }

    Ok(summary)
}
