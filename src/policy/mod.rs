pub mod fcfs;
pub mod rr;
pub mod sjf;

pub use fcfs::FirstComeFirstServed;
pub use rr::RoundRobin;
pub use sjf::ShortestJobFirst;

use crate::core::state::{ProcId, SimState, Ticks};

/// A scheduling discipline, reduced to the decisions that actually
/// differ between policies. The tick engine owns the phase ordering; a
/// policy only reorders the ready queue, votes on preemption, and picks
/// the next process. Every hook defaults to the FIFO behavior.
pub trait Policy {
    /// Runs before the preemption and dispatch decisions each tick.
    fn before_decision(&mut self, _state: &mut SimState) {}

    /// Whether the running process must yield the run slot this tick.
    /// Only consulted while the run slot is occupied.
    fn should_preempt(&self, _state: &SimState) -> bool {
        false
    }

    /// Removes the next process to run from the ready queue.
    fn select(&mut self, state: &mut SimState) -> Option<ProcId> {
        state.pop_ready()
    }

    /// Called when a process is installed in the run slot.
    fn dispatched(&mut self, _pid: ProcId) {}

    /// Called for every tick the run slot was occupied.
    fn executed(&mut self, _pid: ProcId) {}

    /// Called once after the clock reaches the horizon.
    fn finalize(&mut self, _state: &mut SimState, _horizon: Ticks) {}
}

/// The policy an input selects. `Fcfs` and `Fifo` run the same
/// discipline but keep their own report labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Fifo,
    Sjf,
    RoundRobin { quantum: Ticks },
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come First-Served",
            Algorithm::Fifo => "First In, First Out",
            Algorithm::Sjf => "preemptive Shortest Job First",
            Algorithm::RoundRobin { .. } => "Round-Robin",
        }
    }

    pub fn quantum(&self) -> Option<Ticks> {
        match *self {
            Algorithm::RoundRobin { quantum } => Some(quantum),
            _ => None,
        }
    }
}
