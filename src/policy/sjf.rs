use super::Policy;
use crate::core::state::SimState;

/// Preemptive shortest-remaining-time-first.
///
/// The ready queue is re-sorted (stably) by remaining time ahead of
/// every preemption/dispatch decision, so selection is always the
/// plain queue head. A process evicted here is appended after the
/// sort and stays at the back for the rest of the tick.
#[derive(Debug, Default)]
pub struct ShortestJobFirst;

impl Policy for ShortestJobFirst {
    fn before_decision(&mut self, state: &mut SimState) {
        state.sort_ready_by_remaining();
    }

    // Strict inequality: an equal remaining time never evicts the
    // running process.
    fn should_preempt(&self, state: &SimState) -> bool {
        match (state.ready_front_remaining(), state.running_remaining()) {
            (Some(front), Some(running)) => front < running,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Process;

    fn state_with_running_head(bursts: &[(&str, u64)]) -> SimState {
        let procs = bursts
            .iter()
            .map(|&(name, burst)| Process::new(name, 0, burst))
            .collect();
        let mut state = SimState::new(procs);
        state.admit_arrivals();
        let pid = state.pop_ready().unwrap();
        state.set_running(pid);
        state
    }

    #[test]
    fn shorter_queue_head_preempts() {
        let mut state = state_with_running_head(&[("A", 5), ("B", 3)]);
        let mut policy = ShortestJobFirst;
        policy.before_decision(&mut state);
        assert!(policy.should_preempt(&state));
    }

    #[test]
    fn equal_remaining_does_not_preempt() {
        let mut state = state_with_running_head(&[("A", 3), ("B", 3)]);
        let mut policy = ShortestJobFirst;
        policy.before_decision(&mut state);
        assert!(!policy.should_preempt(&state));
    }

    #[test]
    fn empty_queue_does_not_preempt() {
        let state = state_with_running_head(&[("A", 3)]);
        assert!(!ShortestJobFirst.should_preempt(&state));
    }
}
