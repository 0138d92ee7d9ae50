use super::state::SimState;

/// Cross-checks structural invariants after every tick. Everything here
/// is `debug_assert!`-based, so release builds skip the checks.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, state: &SimState) {
        self.step += 1;
        debug_assert_eq!(
            state.now, self.step,
            "observer step count out of sync with the clock"
        );

        if let Some(pid) = state.running {
            debug_assert!(
                !state.ready.contains(&pid),
                "running process {pid} must not sit in the ready queue"
            );
            debug_assert!(
                state.procs[pid].end.is_none(),
                "finished process {pid} still occupies the run slot"
            );
        }

        for (i, &pid) in state.ready.iter().enumerate() {
            debug_assert!(
                !state.ready.iter().skip(i + 1).any(|&other| other == pid),
                "process {pid} queued twice"
            );
            debug_assert!(
                state.procs[pid].end.is_none(),
                "finished process {pid} still present in the ready queue"
            );
        }

        for (pid, process) in state.procs.iter().enumerate() {
            debug_assert!(
                process.remaining <= process.burst,
                "process {pid} remaining exceeds its burst"
            );
            if let Some(start) = process.start {
                debug_assert!(
                    start >= process.arrival,
                    "process {pid} dispatched before it arrived"
                );
            }
            if let Some(end) = process.end {
                debug_assert_eq!(
                    process.remaining, 0,
                    "process {pid} recorded an end with work left"
                );
                debug_assert!(end <= state.now, "process {pid} ends in the future");
            }
        }
    }
}
