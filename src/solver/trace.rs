//! The search trace: one numbered line per rejected candidate and one for
//! the final solution, plus aggregate search counters.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::model::{Assignment, Model, VariableId};

/// Whether a trace entry records a rejected candidate or the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Failure,
    Solution,
}

/// One line of the search trace.
///
/// `bindings` holds `name = value` pairs in assignment order; for a
/// failure the rejected pair is the last entry. Steps start at 1 per solve
/// and increase monotonically in chronological search order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub step: u64,
    pub bindings: Vec<(String, i64)>,
    pub outcome: Outcome,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.step)?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{name}={value}")?;
        }
        let tag = match self.outcome {
            Outcome::Failure => "failure",
            Outcome::Solution => "solution",
        };
        write!(f, "  {tag}")
    }
}

/// Aggregate counters for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Engine calls made, including the one that completed the assignment.
    pub nodes_visited: u64,
    /// Candidate values rejected by the consistency check.
    pub rejections: u64,
    /// Calls that exhausted every candidate and signalled a deadend.
    pub backtracks: u64,
}

/// The chronological record of one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchTrace {
    pub entries: Vec<TraceEntry>,
    pub stats: SearchStats,
}

impl SearchTrace {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, bindings: Vec<(String, i64)>, outcome: Outcome) {
        let entry = TraceEntry {
            step: self.entries.len() as u64 + 1,
            bindings,
            outcome,
        };
        debug!("{entry}");
        self.entries.push(entry);
    }

    /// Records the rejection of `var = value` against the given partial
    /// assignment.
    pub(crate) fn record_failure(
        &mut self,
        model: &Model,
        assignment: &Assignment,
        var: VariableId,
        value: i64,
    ) {
        let mut bindings = assignment.bindings(model);
        bindings.push((model.variable(var).name().to_string(), value));
        self.record(bindings, Outcome::Failure);
    }

    /// Records the complete satisfying assignment.
    pub(crate) fn record_solution(&mut self, model: &Model, assignment: &Assignment) {
        self.record(assignment.bindings(model), Outcome::Solution);
    }

    /// The lines rendered in order, one string per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(TraceEntry::to_string).collect()
    }
}
