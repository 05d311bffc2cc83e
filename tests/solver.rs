//! End-to-end scenarios pinning down the exact solutions and traces the
//! deterministic heuristics produce.

use pretty_assertions::assert_eq;
use vinculum::{loader, solve, Model, Relation};

fn two_not_equal() -> (Model, usize, usize) {
    let mut model = Model::new();
    let a = model.add_variable("A", vec![1, 2]).unwrap();
    let b = model.add_variable("B", vec![1, 2]).unwrap();
    model.add_constraint(a, Relation::NotEqual, b).unwrap();
    (model, a, b)
}

fn three_all_different() -> Model {
    let mut model = Model::new();
    let a = model.add_variable("A", vec![1, 2]).unwrap();
    let b = model.add_variable("B", vec![1, 2]).unwrap();
    let c = model.add_variable("C", vec![1, 2]).unwrap();
    model.add_constraint(a, Relation::NotEqual, b).unwrap();
    model.add_constraint(b, Relation::NotEqual, c).unwrap();
    model.add_constraint(a, Relation::NotEqual, c).unwrap();
    model
}

fn ordered_pair() -> (Model, usize, usize) {
    let mut model = Model::new();
    let a = model.add_variable("A", vec![1, 2, 3]).unwrap();
    let b = model.add_variable("B", vec![1, 2, 3]).unwrap();
    model.add_constraint(a, Relation::LessThan, b).unwrap();
    (model, a, b)
}

#[test]
fn not_equal_pair_plain_backtracking() {
    let (model, a, b) = two_not_equal();
    let (solution, trace) = solve(&model, false);

    let solution = solution.unwrap();
    assert_eq!(solution.get(a), Some(1));
    assert_eq!(solution.get(b), Some(2));
    // Plain backtracking tries B=1 blind and only then discovers the
    // violation against A.
    assert_eq!(
        trace.lines(),
        vec!["1. A=1, B=1  failure", "2. A=1, B=2  solution"]
    );
}

#[test]
fn not_equal_pair_forward_checking() {
    let (model, a, b) = two_not_equal();
    let (solution, trace) = solve(&model, true);

    let solution = solution.unwrap();
    assert_eq!(solution.get(a), Some(1));
    assert_eq!(solution.get(b), Some(2));
    // Forward checking prunes B down to {2} when A=1 is committed, so no
    // failure is ever recorded.
    assert_eq!(trace.lines(), vec!["1. A=1, B=2  solution"]);
}

#[test]
fn three_all_different_over_two_values_is_unsatisfiable_in_both_modes() {
    let model = three_all_different();

    let (plain, plain_trace) = solve(&model, false);
    assert_eq!(plain, None);
    assert_eq!(
        plain_trace.lines(),
        vec![
            "1. A=1, B=1  failure",
            "2. A=1, B=2, C=1  failure",
            "3. A=1, B=2, C=2  failure",
            "4. A=2, B=1, C=1  failure",
            "5. A=2, B=1, C=2  failure",
            "6. A=2, B=2  failure",
        ]
    );

    let (checked, checked_trace) = solve(&model, true);
    assert_eq!(checked, None);
    // Forward checking exhausts the search through emptied domains alone;
    // no candidate ever reaches the consistency check and fails it.
    assert_eq!(checked_trace.entries.len(), 0);
}

#[test]
fn less_than_pair_tries_the_least_constraining_value_first() {
    let (model, a, b) = ordered_pair();

    for fc in [false, true] {
        let (solution, _) = solve(&model, fc);
        let solution = solution.unwrap();
        // A=1 leaves B the most room, and B's surviving values tie at
        // score zero, so ascending order picks 2.
        assert_eq!(solution.get(a), Some(1));
        assert_eq!(solution.get(b), Some(2));
        assert!(solution.get(a).unwrap() < solution.get(b).unwrap());
    }

    let (_, plain_trace) = solve(&model, false);
    assert_eq!(
        plain_trace.lines(),
        vec!["1. A=1, B=1  failure", "2. A=1, B=2  solution"]
    );
    let (_, checked_trace) = solve(&model, true);
    assert_eq!(checked_trace.lines(), vec!["1. A=1, B=2  solution"]);
}

#[test]
fn repeated_solves_of_the_same_model_are_identical() {
    let model = three_all_different();
    for fc in [false, true] {
        let (first, first_trace) = solve(&model, fc);
        let (second, second_trace) = solve(&model, fc);
        assert_eq!(first, second);
        assert_eq!(first_trace, second_trace);
    }
}

#[test]
fn solving_leaves_the_model_untouched() {
    let (model, _, _) = ordered_pair();
    let copy = model.clone();

    let (from_original, original_trace) = solve(&model, true);
    let (from_copy, copy_trace) = solve(&copy, true);

    assert_eq!(from_original, from_copy);
    assert_eq!(original_trace, copy_trace);

    // A second pass over the original still agrees, so the solve did not
    // mutate any variable or constraint.
    let (again, again_trace) = solve(&model, true);
    assert_eq!(from_original, again);
    assert_eq!(original_trace, again_trace);
}

#[test]
fn loaded_models_solve_like_hand_built_ones() {
    let mut model = loader::parse_variables("A: 1 2\nB: 1 2\n").unwrap();
    loader::parse_constraints("A ! B\n", &mut model).unwrap();

    let (hand_built, _, _) = two_not_equal();
    for fc in [false, true] {
        let (from_loaded, loaded_trace) = solve(&model, fc);
        let (from_hand, hand_trace) = solve(&hand_built, fc);
        assert_eq!(from_loaded, from_hand);
        assert_eq!(loaded_trace.lines(), hand_trace.lines());
    }
}
