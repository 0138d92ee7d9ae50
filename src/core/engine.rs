use log::trace;

use super::event::Event;
use super::observer::Observer;
use super::state::{ProcId, Process, SimState, Ticks};
use crate::policy::Policy;

/// Final result of a run: the chronological trace plus the per-process
/// state it ended with. `unfinished` holds every process that had no
/// recorded end when the horizon was reached, before any policy
/// finalization touched the table.
#[derive(Debug)]
pub struct Outcome {
    pub events: Vec<Event>,
    pub procs: Vec<Process>,
    pub unfinished: Vec<ProcId>,
    pub horizon: Ticks,
}

/// Drives the simulated clock from 0 up to (not including) the horizon.
///
/// Each tick runs a fixed phase sequence: arrivals, completion,
/// preemption, dispatch, idle accounting, clock advance, execution.
/// The ordering is a correctness contract — it pins the relative order
/// of same-tick trace entries.
pub struct Simulation<P: Policy> {
    state: SimState,
    policy: P,
    horizon: Ticks,
    events: Vec<Event>,
    observer: Observer,
}

impl<P: Policy> Simulation<P> {
    pub fn new(procs: Vec<Process>, horizon: Ticks, policy: P) -> Self {
        Self {
            state: SimState::new(procs),
            policy,
            horizon,
            events: Vec::new(),
            observer: Observer::new(),
        }
    }

    pub fn run(mut self) -> Outcome {
        while self.state.now < self.horizon {
            self.tick();
        }

        let unfinished: Vec<ProcId> = self
            .state
            .procs
            .iter()
            .enumerate()
            .filter(|(_, p)| p.end.is_none())
            .map(|(pid, _)| pid)
            .collect();

        self.policy.finalize(&mut self.state, self.horizon);

        Outcome {
            events: self.events,
            procs: self.state.procs,
            unfinished,
            horizon: self.horizon,
        }
    }

    fn tick(&mut self) {
        let now = self.state.now;

        // Arrival phase
        for pid in self.state.admit_arrivals() {
            self.events.push(Event::Arrived { tick: now, pid });
        }

        // Completion phase: completion is only ever detected here, so
        // an end stamp is always below the horizon.
        if let Some(pid) = self.state.running {
            if self.state.proc(pid).remaining == 0 {
                self.state.proc_mut(pid).end = Some(now);
                self.state.clear_run_slot();
                self.events.push(Event::Finished { tick: now, pid });
            }
        }

        // Preemption phase; the eviction itself leaves no trace entry.
        self.policy.before_decision(&mut self.state);
        if let Some(pid) = self.state.running {
            if self.policy.should_preempt(&self.state) {
                trace!("t={now} preempting process {pid}");
                self.state.requeue_running();
            }
        }

        // Dispatch phase
        if self.state.running.is_none() {
            if let Some(pid) = self.policy.select(&mut self.state) {
                if self.state.proc(pid).start.is_none() {
                    self.state.proc_mut(pid).start = Some(now);
                }
                self.state.set_running(pid);
                self.policy.dispatched(pid);
                let remaining = self.state.proc(pid).remaining;
                trace!("t={now} dispatching process {pid} (remaining {remaining})");
                self.events.push(Event::Selected {
                    tick: now,
                    pid,
                    remaining,
                });
            }
        }

        // Idle phase
        if self.state.running.is_none() && self.state.ready.is_empty() {
            self.events.push(Event::Idle { tick: now });
        }

        // Clock advance, then execution: the tick's trace entries carry
        // the time at phase start while the unit of work is credited to
        // the interval [now, now + 1).
        self.state.advance_time(1);
        if let Some(pid) = self.state.running {
            self.state.proc_mut(pid).remaining -= 1;
            self.policy.executed(pid);
        }

        self.observer.observe(&self.state);
    }
}
