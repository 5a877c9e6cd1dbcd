use bandit_sim::config::AppConfig;
use bandit_sim::environment::ArmPool;
use bandit_sim::errors::{AppError, SimulationError};
use bandit_sim::simulation::{run_trials, FinalMetrics};

use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct ExperimentReport {
    name: String,
    trials: usize,
    policies: Vec<FinalMetrics>,
}

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    let log_level = config
        .as_ref()
        .map(|config| config.simulation.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match config.map_err(AppError::from).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig) -> Result<(), AppError> {
    let mut pool = ArmPool::new(
        &config.environment.probabilities,
        config.environment.horizon,
    )
    .map_err(SimulationError::from)?;

    info!(
        probabilities = ?config.environment.probabilities,
        horizon = pool.horizon(),
        seed = ?config.simulation.seed,
        "Arm pool ready"
    );

    if config.experiments.is_empty() {
        warn!("No experiments configured");
    }

    let mut reports = Vec::with_capacity(config.experiments.len());
    for experiment in &config.experiments {
        info!(experiment = %experiment.name, "Running experiment");

        let mut policies = Vec::with_capacity(experiment.policies.len());
        for policy_type in &experiment.policies {
            match run_trials(
                &mut pool,
                policy_type,
                experiment.trials,
                config.simulation.seed,
            ) {
                Ok(summary) => policies.extend(summary.final_metrics()),
                Err(SimulationError::Policy(err)) => warn!(
                    experiment = %experiment.name,
                    policy = %policy_type.label(),
                    %err,
                    "Skipping invalid policy"
                ),
                Err(err) => return Err(err.into()),
            }
        }

        reports.push(ExperimentReport {
            name: experiment.name.clone(),
            trials: experiment.trials,
            policies,
        });
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
