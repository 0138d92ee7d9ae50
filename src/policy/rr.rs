use super::Policy;
use crate::core::state::{ProcId, SimState, Ticks};

/// Round-robin with a fixed positive quantum.
///
/// The quantum counter lives alongside the run slot: reset on every
/// dispatch, bumped once per executed tick, and checked with strict
/// equality in the preemption phase. A finished process never trips
/// the check because the preemption vote is only taken while the run
/// slot is still occupied after the completion phase.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: Ticks,
    used: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "round-robin quantum must be positive");
        Self { quantum, used: 0 }
    }
}

impl Policy for RoundRobin {
    fn should_preempt(&self, _state: &SimState) -> bool {
        self.used == self.quantum
    }

    fn dispatched(&mut self, _pid: ProcId) {
        self.used = 0;
    }

    fn executed(&mut self, _pid: ProcId) {
        self.used += 1;
    }

    // Unfinished processes still get an end stamp at the horizon so
    // the report carries (synthetic) timing rows for them.
    fn finalize(&mut self, state: &mut SimState, horizon: Ticks) {
        for process in &mut state.procs {
            if process.end.is_none() {
                process.end = Some(horizon);
            }
        }
    }
}
