//! Renders the fixed-layout textual report.
//!
//! The layout is byte-exact: width-4 time column, a width-3 burst field
//! on Round-Robin selection lines only, and metric rows ordered by the
//! numeric part of the process name.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::SimConfig;
use crate::core::engine::Outcome;
use crate::core::event::Event;
use crate::metrics::ProcMetrics;
use crate::policy::Algorithm;

lazy_static! {
    static ref NAME_INDEX: Regex = Regex::new(r"\d+").unwrap();
}

// `P10` sorts after `P2`; names without digits come first, by name.
fn row_key(name: &str) -> (Option<u64>, String) {
    let index = NAME_INDEX
        .find(name)
        .and_then(|m| m.as_str().parse().ok());
    (index, name.to_string())
}

pub fn render(cfg: &SimConfig, outcome: &Outcome, rows: &[ProcMetrics]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} processes\n", outcome.procs.len()));
    out.push_str(&format!("Using {}\n", cfg.algorithm.label()));
    if let Some(quantum) = cfg.algorithm.quantum() {
        out.push_str(&format!("Quantum   {quantum}\n"));
    }
    out.push('\n');

    for event in &outcome.events {
        render_event(&mut out, event, outcome, cfg.algorithm);
    }
    out.push_str(&format!("Finished at time {}\n\n", outcome.horizon));

    let mut sorted: Vec<&ProcMetrics> = rows.iter().collect();
    sorted.sort_by_key(|row| row_key(&outcome.procs[row.pid].name));
    for row in sorted {
        out.push_str(&format!(
            "{} wait   {} turnaround   {} response   {}\n",
            outcome.procs[row.pid].name, row.waiting, row.turnaround, row.response
        ));
    }

    let mut unfinished: Vec<&str> = outcome
        .unfinished
        .iter()
        .map(|&pid| outcome.procs[pid].name.as_str())
        .collect();
    unfinished.sort_by_key(|name| row_key(name));
    for name in unfinished {
        out.push_str(&format!("{name} did not finish\n"));
    }

    out
}

fn render_event(out: &mut String, event: &Event, outcome: &Outcome, algorithm: Algorithm) {
    match *event {
        Event::Arrived { tick, pid } => {
            out.push_str(&format!(
                "Time {tick:>4} : {} arrived\n",
                outcome.procs[pid].name
            ));
        }
        Event::Selected {
            tick,
            pid,
            remaining,
        } => {
            let name = &outcome.procs[pid].name;
            match algorithm {
                Algorithm::RoundRobin { .. } => out.push_str(&format!(
                    "Time {tick:>4} : {name} selected (burst {remaining:>3})\n"
                )),
                _ => out.push_str(&format!(
                    "Time {tick:>4} : {name} selected (burst {remaining})\n"
                )),
            }
        }
        Event::Finished { tick, pid } => {
            out.push_str(&format!(
                "Time {tick:>4} : {} finished\n",
                outcome.procs[pid].name
            ));
        }
        Event::Idle { tick } => {
            out.push_str(&format!("Time {tick:>4} : Idle\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config, metrics, simulate};

    fn report_for(input: &str) -> String {
        let cfg = config::parse(input).unwrap();
        let outcome = simulate(&cfg);
        let rows = metrics::compute(&outcome.procs);
        render(&cfg, &outcome, &rows)
    }

    #[test]
    fn sjf_report_is_byte_exact() {
        let input = "\
process name A arrival 0 burst 5
process name B arrival 1 burst 3
runfor 10
use sjf
end
";
        let expected = "\
2 processes
Using preemptive Shortest Job First

Time    0 : A arrived
Time    0 : A selected (burst 5)
Time    1 : B arrived
Time    1 : B selected (burst 3)
Time    4 : B finished
Time    4 : A selected (burst 4)
Time    8 : A finished
Time    8 : Idle
Time    9 : Idle
Finished at time 10

A wait   3 turnaround   8 response   0
B wait   0 turnaround   3 response   0
";
        assert_eq!(report_for(input), expected);
    }

    #[test]
    fn round_robin_report_carries_quantum_line_and_wide_burst_field() {
        let input = "\
process name P1 arrival 0 burst 5
runfor 3
use rr
quantum 2
end
";
        let expected = "\
1 processes
Using Round-Robin
Quantum   2

Time    0 : P1 arrived
Time    0 : P1 selected (burst   5)
Time    2 : P1 selected (burst   3)
Finished at time 3

P1 wait   -2 turnaround   3 response   0
P1 did not finish
";
        assert_eq!(report_for(input), expected);
    }

    #[test]
    fn fcfs_leaves_unfinished_processes_unmeasured() {
        let input = "\
process name P1 arrival 0 burst 5
runfor 3
use fcfs
end
";
        let expected = "\
1 processes
Using First-Come First-Served

Time    0 : P1 arrived
Time    0 : P1 selected (burst 5)
Finished at time 3

P1 did not finish
";
        assert_eq!(report_for(input), expected);
    }

    #[test]
    fn fifo_synonym_changes_only_the_header() {
        let input = "\
process name P1 arrival 0 burst 2
runfor 4
use fifo
end
";
        let report = report_for(input);
        assert!(report.starts_with("1 processes\nUsing First In, First Out\n\n"));
    }

    #[test]
    fn rows_sort_by_numeric_name_suffix() {
        let input = "\
process name P10 arrival 0 burst 1
process name P2 arrival 1 burst 1
process name P1 arrival 2 burst 1
runfor 10
use fcfs
end
";
        let report = report_for(input);
        let tail: Vec<&str> = report
            .lines()
            .filter(|line| line.contains(" wait "))
            .collect();
        assert_eq!(tail.len(), 3);
        assert!(tail[0].starts_with("P1 "));
        assert!(tail[1].starts_with("P2 "));
        assert!(tail[2].starts_with("P10 "));
    }

    #[test]
    fn wide_ticks_keep_the_column_aligned() {
        let input = "\
process name P1 arrival 9998 burst 1
runfor 10000
use fcfs
end
";
        let report = report_for(input);
        assert!(report.contains("Time 9998 : P1 arrived\n"));
        assert!(report.contains("Time    0 : Idle\n"));
    }
}
