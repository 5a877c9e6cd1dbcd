use crate::policies::PolicyType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_probabilities() -> Vec<f64> {
    vec![0.35, 0.6, 0.1]
}

fn default_horizon() -> usize {
    3000
}

fn default_trials() -> usize {
    30
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_probabilities")]
    pub probabilities: Vec<f64>,
    #[serde(default = "default_horizon")]
    pub horizon: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            probabilities: default_probabilities(),
            horizon: default_horizon(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExperimentConfig {
    pub name: String,
    #[serde(default = "default_trials")]
    pub trials: usize,
    pub policies: Vec<PolicyType>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub experiments: Vec<ExperimentConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse("");
        assert_eq!(config.simulation.log_level, "info");
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.environment.probabilities, vec![0.35, 0.6, 0.1]);
        assert_eq!(config.environment.horizon, 3000);
        assert!(config.experiments.is_empty());
    }

    #[test]
    fn experiments() {
        let config = parse(
            r#"
            [simulation]
            seed = 42

            [[experiments]]
            name = "ucb"
            trials = 5
            policies = [
                { ucb = { c = 0.5 } },
                { gradient = { alpha = 0.1, use_baseline = false } },
            ]
            "#,
        );

        assert_eq!(config.simulation.seed, Some(42));
        let experiment = &config.experiments[0];
        assert_eq!(experiment.trials, 5);
        assert_eq!(
            experiment.policies,
            vec![
                PolicyType::Ucb {
                    c: 0.5,
                    initial_value: 0.0
                },
                PolicyType::Gradient {
                    alpha: 0.1,
                    use_baseline: false
                },
            ]
        );
    }
}
