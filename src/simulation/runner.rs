use super::recorder::{RunResult, StepRecorder};

use crate::environment::ArmPool;
use crate::errors::SimulationError;
use crate::policies::{Policy, PolicyType};

use rand::rngs::SmallRng;
use tracing::{debug, trace};

/// Runs one fresh `policy_type` for `horizon` steps against a freshly reset `pool`.
///
/// Parameters are validated before the pool is touched. The same `rng`
/// drives both arm pulls and the policy's own sampling.
pub fn run(
    pool: &mut ArmPool,
    horizon: usize,
    policy_type: &PolicyType,
    rng: &mut SmallRng,
) -> Result<RunResult, SimulationError> {
    let mut policy = policy_type.clone().into_inner(pool.len())?;
    simulate(pool, horizon, policy.as_mut(), rng)
}

/// Same loop as [`run`] for an already built policy.
pub fn simulate(
    pool: &mut ArmPool,
    horizon: usize,
    policy: &mut dyn Policy,
    rng: &mut SmallRng,
) -> Result<RunResult, SimulationError> {
    pool.reset();
    let (optimal_arm, optimal_reward) = pool.optimal_arm();

    debug!(
        policy = %policy.policy_type().label(),
        horizon,
        optimal_arm,
        optimal_reward,
        "Starting run"
    );

    let mut recorder = StepRecorder::new(optimal_arm, optimal_reward, horizon);
    for step in 0..horizon {
        let arm_id = policy.draw(step, rng)?;
        let reward = pool.pull(arm_id, rng)?;
        policy.update(arm_id, reward)?;

        trace!(step, arm_id, reward, "Step");
        recorder.record(arm_id, reward);
    }

    Ok(recorder.into_result())
}
