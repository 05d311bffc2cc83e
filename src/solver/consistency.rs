//! The consistency check applied to each candidate assignment before the
//! engine commits to it.

use crate::{
    model::{Assignment, Model, VariableId},
    solver::propagate::Propagator,
};

/// Decides whether assigning `value` to `var` is acceptable against the
/// current partial assignment.
///
/// Every constraint owned by `var` whose partner is already assigned must
/// hold against the partner's value. Constraints with unassigned partners
/// are delegated to the propagator: forward checking performs its one-step
/// lookahead there, plain backtracking performs no check at all.
///
/// Rejection is an ordinary, frequent outcome of search, not an error.
pub fn consistent(
    model: &Model,
    var: VariableId,
    value: i64,
    assignment: &Assignment,
    propagator: &dyn Propagator,
) -> bool {
    for constraint in model.variable(var).constraints() {
        if let Some(partner_value) = assignment.get(constraint.partner) {
            if constraint.relation.violates(value, partner_value) {
                return false;
            }
        }
    }
    propagator.admits(model, var, value, assignment)
}
