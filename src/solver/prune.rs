//! The future-map builder: the hypothetical domain reductions used for
//! value ordering in both modes and for pruning under forward checking.

use std::collections::BTreeMap;

use im::OrdSet;

use crate::model::{DomainMap, Model, VariableId};

/// For each candidate value of the branching variable, the reduced domains
/// every remaining unassigned variable would be left with if that value
/// were chosen. Keyed by candidate value, ascending; ephemeral within one
/// engine call.
pub type FutureMap = BTreeMap<i64, DomainMap>;

/// Builds the future map for `branch_var` over the variables in `rest`
/// (the set that stays unassigned after `branch_var` is bound).
///
/// A retained value of some other variable `u` is one that violates no
/// constraint on `u` pointing at `branch_var` when checked against the
/// candidate. Under forward checking `domains` is the live legal-values
/// map, so the reductions compound down the search; under plain
/// backtracking it is the static domains and the result feeds value
/// ordering only.
///
/// Driving some variable's set to empty is not a failure here; it surfaces
/// later as a candidate with nothing left to try.
pub fn future_map(
    model: &Model,
    branch_var: VariableId,
    rest: &OrdSet<VariableId>,
    domains: &DomainMap,
) -> FutureMap {
    let candidates = domains
        .get(&branch_var)
        .cloned()
        .unwrap_or_default();

    let mut future = FutureMap::new();
    for &value in candidates.iter() {
        let mut reduced = DomainMap::new();
        for &other in rest.iter() {
            let kept: im::Vector<i64> = domains
                .get(&other)
                .map(|current| {
                    current
                        .iter()
                        .copied()
                        .filter(|&candidate| {
                            model
                                .variable(other)
                                .constraints()
                                .iter()
                                .filter(|c| c.partner == branch_var)
                                .all(|c| !c.relation.violates(candidate, value))
                        })
                        .collect()
                })
                .unwrap_or_default();
            reduced.insert(other, kept);
        }
        future.insert(value, reduced);
    }
    future
}
