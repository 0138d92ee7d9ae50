pub mod config;
pub mod core;
pub mod metrics;
pub mod policy;
pub mod report;

pub use crate::config::SimConfig;
pub use crate::core::{Event, Outcome, ProcId, Process, Simulation, Ticks};
pub use crate::policy::{Algorithm, Policy};

use crate::policy::{FirstComeFirstServed, RoundRobin, ShortestJobFirst};

/// Runs the configured policy over the configured workload.
///
/// The engine itself cannot fail: the config is validated before it
/// gets here, and a run always terminates after exactly `run_for`
/// ticks.
pub fn simulate(cfg: &SimConfig) -> Outcome {
    let procs = cfg.procs.clone();
    match cfg.algorithm {
        Algorithm::Fcfs | Algorithm::Fifo => {
            Simulation::new(procs, cfg.run_for, FirstComeFirstServed).run()
        }
        Algorithm::Sjf => Simulation::new(procs, cfg.run_for, ShortestJobFirst).run(),
        Algorithm::RoundRobin { quantum } => {
            Simulation::new(procs, cfg.run_for, RoundRobin::new(quantum)).run()
        }
    }
}
