//! Propagation strategies: the difference between plain backtracking and
//! backtracking with forward checking, expressed as a strategy object
//! injected once at the top of the search rather than a flag branched on
//! at every call site. The engine's control flow is identical under both.

use crate::model::{Assignment, DomainMap, Model, VariableId};

/// The two capabilities that vary between propagation modes.
///
/// The engine always carries a [`DomainMap`] through the recursion. Under
/// [`ForwardChecking`] it is the live remaining-legal-values map, narrowed
/// after every assignment; under [`NoPropagation`] it stays the static
/// domains for the whole search, so the same map serves variable selection
/// and value ordering in both modes.
pub trait Propagator: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Extra acceptance requirement for the candidate `var = value`, beyond
    /// the checks against already-assigned partners that the consistency
    /// checker always performs.
    fn admits(&self, model: &Model, var: VariableId, value: i64, assignment: &Assignment) -> bool;

    /// The domain map handed to the child call after committing to a value,
    /// given the hypothetical `reduced` map computed for that value by the
    /// future-map builder.
    fn narrow(&self, current: &DomainMap, reduced: &DomainMap) -> DomainMap;
}

/// Plain backtracking: no lookahead, no pruning. Checks against unassigned
/// partners are deferred until those partners are themselves assigned.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPropagation;

impl Propagator for NoPropagation {
    fn name(&self) -> &'static str {
        "none"
    }

    fn admits(&self, _model: &Model, _var: VariableId, _value: i64, _assignment: &Assignment) -> bool {
        true
    }

    fn narrow(&self, current: &DomainMap, _reduced: &DomainMap) -> DomainMap {
        current.clone()
    }
}

/// Forward checking: a candidate must leave every unassigned partner at
/// least one non-violating value, and committing to it narrows the child
/// call's domain map to the values that survive the assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &'static str {
        "forward-checking"
    }

    fn admits(&self, model: &Model, var: VariableId, value: i64, assignment: &Assignment) -> bool {
        // One-step lookahead over each unassigned partner's full static
        // domain. Distinct from the future-map pruning: this rejects the
        // candidate outright instead of leaving an empty set for the child
        // call to discover.
        model.variable(var).constraints().iter().all(|c| {
            assignment.contains(c.partner)
                || model
                    .variable(c.partner)
                    .domain()
                    .iter()
                    .any(|&w| !c.relation.violates(value, w))
        })
    }

    fn narrow(&self, _current: &DomainMap, reduced: &DomainMap) -> DomainMap {
        reduced.clone()
    }
}
