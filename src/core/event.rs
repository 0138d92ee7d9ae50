use super::state::{ProcId, Ticks};

/// One entry in the chronological simulation trace. Within a tick,
/// entries appear in phase order: arrivals, then a finish, then a
/// dispatch, with idle only when the tick ends with nothing to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Arrived {
        tick: Ticks,
        pid: ProcId,
    },
    Selected {
        tick: Ticks,
        pid: ProcId,
        remaining: Ticks,
    },
    Finished {
        tick: Ticks,
        pid: ProcId,
    },
    // Run slot and ready queue both empty, even after dispatch
    Idle {
        tick: Ticks,
    },
}

impl Event {
    pub fn tick(&self) -> Ticks {
        match *self {
            Event::Arrived { tick, .. }
            | Event::Selected { tick, .. }
            | Event::Finished { tick, .. }
            | Event::Idle { tick } => tick,
        }
    }
}
