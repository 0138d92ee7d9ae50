use super::Policy;

/// Non-preemptive queue order: the head of the ready queue runs to
/// completion. Both the `fcfs` and `fifo` directives land here.
#[derive(Debug, Default)]
pub struct FirstComeFirstServed;

impl Policy for FirstComeFirstServed {}
