//! Per-process performance numbers derived from final scheduling state.
//!
//! Only processes with a recorded end time produce a row; under
//! Round-Robin that includes the synthetic horizon stamps, so a row's
//! waiting time can legitimately be negative.

use average::{Estimate, Mean};

use crate::core::state::{ProcId, Process};

/// Timing metrics for one process with a recorded end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcMetrics {
    pub pid: ProcId,
    pub waiting: i64,
    pub turnaround: i64,
    pub response: i64,
}

/// Computes a metrics row for every process with a recorded end time.
///
/// A process the horizon never dispatched reports response time 0; the
/// report format cannot distinguish that from an immediate dispatch.
pub fn compute(procs: &[Process]) -> Vec<ProcMetrics> {
    procs
        .iter()
        .enumerate()
        .filter_map(|(pid, process)| {
            let end = process.end? as i64;
            let turnaround = end - process.arrival as i64;
            let waiting = turnaround - process.burst as i64;
            let response = process
                .start
                .map(|start| (start - process.arrival) as i64)
                .unwrap_or(0);
            Some(ProcMetrics {
                pid,
                waiting,
                turnaround,
                response,
            })
        })
        .collect()
}

/// Workload-wide averages, logged for operators; never part of the
/// report file.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub waiting: f64,
    pub turnaround: f64,
    pub response: f64,
}

impl Summary {
    pub fn of(rows: &[ProcMetrics]) -> Self {
        Self {
            waiting: avg(rows.iter().map(|row| row.waiting as f64)),
            turnaround: avg(rows.iter().map(|row| row.turnaround as f64)),
            response: avg(rows.iter().map(|row| row.response as f64)),
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}
