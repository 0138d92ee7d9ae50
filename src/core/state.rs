use std::collections::VecDeque;

// Index into the simulation's process table
pub type ProcId = usize;
pub type Ticks = u64;

/// One schedulable process: static identity plus the mutable state the
/// tick engine drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub start: Option<Ticks>,
    pub end: Option<Ticks>,
}

impl Process {
    pub fn new(name: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            remaining: burst,
            start: None,
            end: None,
        }
    }

    pub fn finished(&self) -> bool {
        self.end.is_some()
    }
}

/// All mutable state owned by a single simulation run: the clock, the
/// process table, the ready queue, the run slot, and the cursor into
/// the arrival-sorted feed.
#[derive(Debug)]
pub struct SimState {
    pub now: Ticks,
    pub procs: Vec<Process>,
    pub ready: VecDeque<ProcId>,
    pub running: Option<ProcId>,
    arrival_cursor: usize,
}

impl SimState {
    pub fn new(mut procs: Vec<Process>) -> Self {
        // Stable: equal arrivals keep input order, which is the
        // tie-break order everywhere downstream.
        procs.sort_by_key(|p| p.arrival);

        Self {
            now: 0,
            procs,
            ready: VecDeque::new(),
            running: None,
            arrival_cursor: 0,
        }
    }

    pub fn proc(&self, pid: ProcId) -> &Process {
        &self.procs[pid]
    }

    pub fn proc_mut(&mut self, pid: ProcId) -> &mut Process {
        &mut self.procs[pid]
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    /// Moves every process whose arrival time has been reached into the
    /// ready queue, in arrival order. Returns the ids admitted this
    /// tick; the feed is sorted, so the eligible prefix is contiguous.
    pub fn admit_arrivals(&mut self) -> Vec<ProcId> {
        let mut admitted = Vec::new();
        while self.arrival_cursor < self.procs.len()
            && self.procs[self.arrival_cursor].arrival <= self.now
        {
            self.ready.push_back(self.arrival_cursor);
            admitted.push(self.arrival_cursor);
            self.arrival_cursor += 1;
        }
        admitted
    }

    pub fn pop_ready(&mut self) -> Option<ProcId> {
        self.ready.pop_front()
    }

    /// Evicts the running process to the back of the ready queue. No
    /// trace entry is recorded for the eviction itself.
    pub fn requeue_running(&mut self) {
        if let Some(pid) = self.running.take() {
            debug_assert!(
                self.procs[pid].remaining > 0,
                "process {pid} evicted with no work left"
            );
            self.ready.push_back(pid);
        }
    }

    pub fn set_running(&mut self, pid: ProcId) {
        debug_assert!(self.running.is_none(), "run slot already occupied");
        debug_assert!(
            !self.procs[pid].finished(),
            "finished process {pid} cannot occupy the run slot"
        );
        self.running = Some(pid);
    }

    pub fn clear_run_slot(&mut self) {
        self.running = None;
    }

    pub fn running_remaining(&self) -> Option<Ticks> {
        self.running.map(|pid| self.procs[pid].remaining)
    }

    pub fn ready_front_remaining(&self) -> Option<Ticks> {
        self.ready.front().map(|&pid| self.procs[pid].remaining)
    }

    /// Stable re-sort of the ready queue by ascending remaining time;
    /// ties keep their prior relative order.
    pub fn sort_ready_by_remaining(&mut self) {
        let procs = &self.procs;
        self.ready
            .make_contiguous()
            .sort_by_key(|&pid| procs[pid].remaining);
    }
}
