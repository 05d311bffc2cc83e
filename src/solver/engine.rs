//! The recursive backtracking search engine.

use im::OrdSet;

use crate::{
    model::{Assignment, DomainMap, Model, VariableId},
    solver::{
        consistency,
        heuristics::{value, variable},
        propagate::{ForwardChecking, NoPropagation, Propagator},
        prune,
        trace::SearchTrace,
    },
};

/// The engine for solving a finite-domain binary CSP.
///
/// Each solve is a depth-first recursion: select a branching variable,
/// build the future map, order its candidate values least-constraining
/// first, and for each value either reject it (recording a failure trace
/// entry) or bind it and recurse. The first complete assignment wins and
/// unwinds all pending calls; a call that exhausts its candidates signals
/// a deadend to its parent. Both "solution found" and "unsatisfiable" are
/// ordinary terminations.
///
/// The propagation mode is fixed at construction by injecting a
/// [`Propagator`]; the recursion itself is identical in both modes.
#[derive(Debug)]
pub struct Solver {
    propagator: Box<dyn Propagator>,
}

impl Solver {
    pub fn new(propagator: Box<dyn Propagator>) -> Self {
        Self { propagator }
    }

    /// A solver using [`ForwardChecking`] when `enabled`, plain
    /// backtracking ([`NoPropagation`]) otherwise.
    pub fn with_forward_checking(enabled: bool) -> Self {
        if enabled {
            Self::new(Box::new(ForwardChecking))
        } else {
            Self::new(Box::new(NoPropagation))
        }
    }

    /// Searches for one satisfying assignment.
    ///
    /// Returns the assignment if the model is satisfiable, `None` if it is
    /// not, together with the trace of the search. The model is never
    /// mutated; solving the same model twice yields an identical
    /// assignment and an identical trace.
    pub fn solve(&self, model: &Model) -> (Option<Assignment>, SearchTrace) {
        let mut trace = SearchTrace::new();
        let unassigned: OrdSet<VariableId> = model.ids().collect();
        let domains = model.initial_domains();
        let solution = self.search(model, &unassigned, Assignment::new(), &domains, &mut trace);
        (solution, trace)
    }

    fn search(
        &self,
        model: &Model,
        unassigned: &OrdSet<VariableId>,
        assignment: Assignment,
        domains: &DomainMap,
        trace: &mut SearchTrace,
    ) -> Option<Assignment> {
        trace.stats.nodes_visited += 1;

        if assignment.len() == model.len() {
            trace.record_solution(model, &assignment);
            return Some(assignment);
        }

        let branch_var = variable::select_branch_variable(model, unassigned, domains)?;
        let rest = unassigned.without(&branch_var);
        let future = prune::future_map(model, branch_var, &rest, domains);

        for candidate in value::order_values(&future) {
            if !consistency::consistent(
                model,
                branch_var,
                candidate,
                &assignment,
                self.propagator.as_ref(),
            ) {
                trace.stats.rejections += 1;
                trace.record_failure(model, &assignment, branch_var, candidate);
                continue;
            }

            let child_domains = self.propagator.narrow(domains, &future[&candidate]);
            let extended = assignment.bind(branch_var, candidate);
            if let Some(solution) = self.search(model, &rest, extended, &child_domains, trace) {
                return Some(solution);
            }
        }

        trace.stats.backtracks += 1;
        None
    }
}

/// Solves `model` with the given propagation mode. Convenience wrapper
/// around [`Solver::with_forward_checking`].
pub fn solve(model: &Model, forward_checking: bool) -> (Option<Assignment>, SearchTrace) {
    Solver::with_forward_checking(forward_checking).solve(model)
}
