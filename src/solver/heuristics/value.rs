//! Value ordering: in what order to try the branching variable's
//! candidate values.

use crate::solver::prune::FutureMap;

/// Least-constraining-value ordering over the future map.
///
/// A candidate's score is the total number of values the remaining
/// unassigned variables would keep if it were chosen; higher scores are
/// tried first, since they leave the rest of the problem the most room.
/// Equal scores fall back to ascending numeric order, so the result is
/// deterministic. The ordering affects search effort only, never
/// correctness.
pub fn order_values(future: &FutureMap) -> Vec<i64> {
    let mut scored: Vec<(i64, usize)> = future
        .iter()
        .map(|(&value, reduced)| (value, reduced.values().map(im::Vector::len).sum()))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(value, _)| value).collect()
}

#[cfg(test)]
mod tests {
    use im::OrdSet;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{Model, Relation, VariableId},
        solver::prune::future_map,
    };

    #[test]
    fn least_constraining_value_comes_first() {
        let mut model = Model::new();
        let a = model.add_variable("A", vec![1, 2, 3]).unwrap();
        let b = model.add_variable("B", vec![1, 2, 3]).unwrap();
        model.add_constraint(a, Relation::LessThan, b).unwrap();

        let rest: OrdSet<VariableId> = [b].into_iter().collect();
        let future = future_map(&model, a, &rest, &model.initial_domains());

        // A = 1 leaves B two values, A = 2 one, A = 3 none.
        assert_eq!(order_values(&future), vec![1, 2, 3]);
    }

    #[test]
    fn ties_fall_back_to_ascending_value() {
        let mut model = Model::new();
        let a = model.add_variable("A", vec![3, 1, 2]).unwrap();
        let b = model.add_variable("B", vec![1, 2, 3, 4]).unwrap();
        model.add_constraint(a, Relation::NotEqual, b).unwrap();

        let rest: OrdSet<VariableId> = [b].into_iter().collect();
        let future = future_map(&model, a, &rest, &model.initial_domains());

        // Every candidate leaves B exactly three values.
        assert_eq!(order_values(&future), vec![1, 2, 3]);
    }
}
