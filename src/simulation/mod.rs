pub mod recorder;
pub mod runner;
pub mod trials;

pub use recorder::{RunResult, StepRecorder};
pub use runner::{run, simulate};
pub use trials::{run_trials, FinalMetrics, TrialSummary};
