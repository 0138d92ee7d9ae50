//! Parser for the line-oriented workload description language.
//!
//! Directives: `process name <id> arrival <int> burst <int>`,
//! `runfor <int>`, `use <fcfs|fifo|sjf|rr>`, `quantum <int>`, and
//! `end`, which stops parsing. Blank lines and `#` comments are
//! skipped. Every validation failure is fatal; there is no partial
//! configuration.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashSet;

use crate::core::state::{Process, Ticks};
use crate::policy::Algorithm;

/// A fully validated simulation input.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub procs: Vec<Process>,
    pub run_for: Ticks,
    pub algorithm: Algorithm,
}

pub fn load(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<SimConfig> {
    let mut procs = Vec::new();
    let mut names = FxHashSet::default();
    let mut run_for = None;
    let mut policy_name = None;
    let mut quantum = None;

    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&directive) = tokens.first() else {
            continue;
        };
        if directive.starts_with('#') {
            continue;
        }

        match directive {
            "process" => {
                let [_, kw_name, name, kw_arrival, arrival, kw_burst, burst] = tokens[..]
                else {
                    bail!("line {lineno}: expected `process name <id> arrival <int> burst <int>`");
                };
                if kw_name != "name" || kw_arrival != "arrival" || kw_burst != "burst" {
                    bail!("line {lineno}: expected `process name <id> arrival <int> burst <int>`");
                }
                let arrival: Ticks = arrival
                    .parse()
                    .with_context(|| format!("line {lineno}: invalid arrival time"))?;
                let burst: Ticks = burst
                    .parse()
                    .with_context(|| format!("line {lineno}: invalid burst time"))?;
                if burst == 0 {
                    bail!("line {lineno}: burst time must be positive");
                }
                if !names.insert(name.to_string()) {
                    bail!("line {lineno}: duplicate process name `{name}`");
                }
                procs.push(Process::new(name, arrival, burst));
            }
            "runfor" => run_for = Some(int_directive(&tokens, lineno, "runfor")?),
            "quantum" => quantum = Some(int_directive(&tokens, lineno, "quantum")?),
            "use" => {
                let [_, name] = tokens[..] else {
                    bail!("line {lineno}: expected `use <fcfs|fifo|sjf|rr>`");
                };
                policy_name = Some((name.to_string(), lineno));
            }
            "end" => break,
            other => bail!("line {lineno}: unknown directive `{other}`"),
        }
    }

    let run_for = run_for.context("input never sets `runfor`")?;
    let (policy_name, use_lineno) =
        policy_name.context("input never selects a policy with `use`")?;

    let algorithm = match policy_name.as_str() {
        "fcfs" => Algorithm::Fcfs,
        "fifo" => Algorithm::Fifo,
        "sjf" => Algorithm::Sjf,
        "rr" => {
            let quantum =
                quantum.context("a quantum value is required for Round-Robin scheduling")?;
            if quantum == 0 {
                bail!("quantum must be positive");
            }
            Algorithm::RoundRobin { quantum }
        }
        other => bail!("line {use_lineno}: unknown scheduling policy `{other}`"),
    };

    Ok(SimConfig {
        procs,
        run_for,
        algorithm,
    })
}

fn int_directive(tokens: &[&str], lineno: usize, directive: &str) -> Result<Ticks> {
    let [_, value] = tokens[..] else {
        bail!("line {lineno}: expected `{directive} <int>`");
    };
    value
        .parse()
        .with_context(|| format!("line {lineno}: invalid {directive} value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# two staggered processes
process name P1 arrival 0 burst 5
process name P2 arrival 3 burst 2

runfor 20
use sjf
end
ignored after end
";

    #[test]
    fn parses_a_full_input() {
        let cfg = parse(SAMPLE).unwrap();
        assert_eq!(cfg.run_for, 20);
        assert_eq!(cfg.algorithm, Algorithm::Sjf);
        assert_eq!(cfg.procs.len(), 2);
        assert_eq!(cfg.procs[0].name, "P1");
        assert_eq!(cfg.procs[0].arrival, 0);
        assert_eq!(cfg.procs[0].burst, 5);
        assert_eq!(cfg.procs[1].name, "P2");
        assert_eq!(cfg.procs[1].arrival, 3);
        assert_eq!(cfg.procs[1].burst, 2);
    }

    #[test]
    fn fcfs_and_fifo_keep_distinct_labels() {
        let fcfs = parse("runfor 5\nuse fcfs\n").unwrap();
        let fifo = parse("runfor 5\nuse fifo\n").unwrap();
        assert_eq!(fcfs.algorithm.label(), "First-Come First-Served");
        assert_eq!(fifo.algorithm.label(), "First In, First Out");
    }

    #[test]
    fn round_robin_carries_its_quantum() {
        let cfg = parse("runfor 10\nquantum 4\nuse rr\n").unwrap();
        assert_eq!(cfg.algorithm, Algorithm::RoundRobin { quantum: 4 });
        assert_eq!(cfg.algorithm.quantum(), Some(4));
    }

    #[test]
    fn round_robin_without_quantum_is_fatal() {
        let err = parse("runfor 10\nuse rr\n").unwrap_err();
        assert!(err.to_string().contains("quantum"));
    }

    #[test]
    fn zero_quantum_is_fatal() {
        assert!(parse("runfor 10\nquantum 0\nuse rr\n").is_err());
    }

    #[test]
    fn quantum_is_ignored_for_other_policies() {
        let cfg = parse("runfor 10\nquantum 4\nuse fcfs\n").unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Fcfs);
        assert_eq!(cfg.algorithm.quantum(), None);
    }

    #[test]
    fn zero_burst_is_fatal() {
        let err = parse("process name P1 arrival 0 burst 0\nrunfor 5\nuse sjf\n").unwrap_err();
        assert!(err.to_string().contains("burst"));
    }

    #[test]
    fn duplicate_names_are_fatal() {
        let input = "process name P1 arrival 0 burst 1\nprocess name P1 arrival 2 burst 1\nrunfor 5\nuse sjf\n";
        let err = parse(input).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn truncated_process_directive_is_fatal() {
        assert!(parse("process name P1 arrival 0\nrunfor 5\nuse sjf\n").is_err());
    }

    #[test]
    fn misplaced_keywords_are_fatal() {
        assert!(parse("process id P1 at 0 len 5\nrunfor 5\nuse sjf\n").is_err());
    }

    #[test]
    fn unknown_directive_is_fatal() {
        let err = parse("priority high\nrunfor 5\nuse sjf\n").unwrap_err();
        assert!(err.to_string().contains("unknown directive"));
    }

    #[test]
    fn unknown_policy_is_fatal() {
        let err = parse("runfor 5\nuse cfs\n").unwrap_err();
        assert!(err.to_string().contains("unknown scheduling policy"));
    }

    #[test]
    fn missing_runfor_is_fatal() {
        assert!(parse("use sjf\n").is_err());
    }

    #[test]
    fn missing_use_is_fatal() {
        assert!(parse("runfor 5\n").is_err());
    }

    #[test]
    fn non_numeric_fields_are_fatal() {
        assert!(parse("process name P1 arrival zero burst 5\nrunfor 5\nuse sjf\n").is_err());
        assert!(parse("runfor soon\nuse sjf\n").is_err());
    }
}
