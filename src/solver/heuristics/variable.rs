//! Variable selection: which unassigned variable to branch on next.

use im::OrdSet;

use crate::model::{DomainMap, Model, VariableId};

/// Selects the next variable to branch on, applying three tie-breakers in
/// order:
///
/// 1. Most constrained variable: fewest values left in the carried domain
///    map (remaining legal values under forward checking, static domain
///    sizes under plain backtracking). A candidate survives iff its count
///    equals the minimum.
/// 2. Most constraining variable: among survivors, the highest count of
///    constraints whose partner is still unassigned.
/// 3. Lexicographically smallest name.
///
/// The same input state always yields the same selection, which pins down
/// the trace and the specific solution found.
pub fn select_branch_variable(
    model: &Model,
    unassigned: &OrdSet<VariableId>,
    domains: &DomainMap,
) -> Option<VariableId> {
    let remaining = |var: VariableId| domains.get(&var).map_or(0, |d| d.len());

    let fewest = unassigned.iter().map(|&var| remaining(var)).min()?;
    let mut candidates: Vec<VariableId> = unassigned
        .iter()
        .copied()
        .filter(|&var| remaining(var) == fewest)
        .collect();

    if candidates.len() > 1 {
        let degree = |var: VariableId| {
            model
                .variable(var)
                .constraints()
                .iter()
                .filter(|c| unassigned.contains(&c.partner))
                .count()
        };
        let most_constraining = candidates.iter().copied().map(degree).max().unwrap_or(0);
        candidates.retain(|&var| degree(var) == most_constraining);
    }

    candidates
        .into_iter()
        .min_by(|&a, &b| model.variable(a).name().cmp(model.variable(b).name()))
}
