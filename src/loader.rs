//! Parsing of the two-file problem format into a [`Model`].
//!
//! The variable file has one line per variable, `NAME: v1 v2 ... vk` (the
//! colon is optional). The constraint file has one line per constraint,
//! `LEFT op RIGHT` with `op` one of `=`, `!`, `<`, `>`. Each stated
//! constraint is installed as a mirrored pair on both endpoints.
//!
//! All validation happens here, before the engine runs: malformed lines,
//! unknown variable references, duplicate variables, and empty domains are
//! load-time errors, never search-time conditions.

use std::{fs, path::Path};

use crate::{
    error::{Error, Result},
    model::{Model, Relation},
};

/// Reads a variable file and a constraint file and builds the model.
pub fn load_model(var_path: &Path, con_path: &Path) -> Result<Model> {
    let var_text = read(var_path)?;
    let con_text = read(con_path)?;
    let mut model = parse_variables(&var_text)?;
    parse_constraints(&con_text, &mut model)?;
    Ok(model)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses variable lines of the form `NAME: v1 v2 ... vk`.
pub fn parse_variables(text: &str) -> Result<Model> {
    let mut model = Model::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, rest) = match line.split_once(':') {
            Some((name, rest)) => (name.trim(), rest),
            // The colon is optional; fall back to the first whitespace split.
            None => line
                .split_once(char::is_whitespace)
                .ok_or_else(|| Error::MalformedVariableLine(line.to_string()))?,
        };
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(Error::MalformedVariableLine(line.to_string()));
        }
        let domain = rest
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidDomainValue(token.to_string()))
            })
            .collect::<Result<Vec<i64>>>()?;
        model.add_variable(name, domain)?;
    }
    Ok(model)
}

/// Parses constraint lines of the form `LEFT op RIGHT` and installs the
/// mirrored constraint pairs on the model.
pub fn parse_constraints(text: &str, model: &mut Model) -> Result<()> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(left), Some(op), Some(right), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::MalformedConstraintLine(line.to_string()));
        };
        let relation = match op {
            "=" => Relation::Equal,
            "!" => Relation::NotEqual,
            "<" => Relation::LessThan,
            ">" => Relation::GreaterThan,
            _ => return Err(Error::UnknownOperator(op.to_string())),
        };
        let left_id = model
            .id_of(left)
            .ok_or_else(|| Error::UnknownVariable(left.to_string()))?;
        let right_id = model
            .id_of(right)
            .ok_or_else(|| Error::UnknownVariable(right.to_string()))?;
        model.add_constraint(left_id, relation, right_id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Constraint;

    #[test]
    fn parses_variables_with_and_without_colon() {
        let model = parse_variables("A: 1 2 3\nB 4 5\n\nC: 7\n").unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(model.variable(model.id_of("A").unwrap()).domain(), &[1, 2, 3]);
        assert_eq!(model.variable(model.id_of("B").unwrap()).domain(), &[4, 5]);
        assert_eq!(model.variable(model.id_of("C").unwrap()).domain(), &[7]);
    }

    #[test]
    fn parses_constraints_and_mirrors_them() {
        let mut model = parse_variables("A: 1 2\nB: 1 2\n").unwrap();
        parse_constraints("A < B\n", &mut model).unwrap();

        let a = model.id_of("A").unwrap();
        let b = model.id_of("B").unwrap();
        assert_eq!(
            model.variable(a).constraints(),
            &[Constraint {
                relation: Relation::LessThan,
                partner: b
            }]
        );
        assert_eq!(
            model.variable(b).constraints(),
            &[Constraint {
                relation: Relation::GreaterThan,
                partner: a
            }]
        );
    }

    #[test]
    fn all_four_operators_map_to_relations() {
        let mut model = parse_variables("A: 1\nB: 2\n").unwrap();
        parse_constraints("A = B\nA ! B\nA < B\nA > B\n", &mut model).unwrap();

        let a = model.id_of("A").unwrap();
        let relations: Vec<Relation> = model
            .variable(a)
            .constraints()
            .iter()
            .map(|c| c.relation)
            .collect();
        assert_eq!(
            relations,
            vec![
                Relation::Equal,
                Relation::NotEqual,
                Relation::LessThan,
                Relation::GreaterThan
            ]
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_variables("A:\n"),
            Err(Error::EmptyDomain(_))
        ));
        assert!(matches!(
            parse_variables("A: 1 x 3\n"),
            Err(Error::InvalidDomainValue(_))
        ));
        assert!(matches!(
            parse_variables("A: 1\nA: 2\n"),
            Err(Error::DuplicateVariable(_))
        ));

        let mut model = parse_variables("A: 1\nB: 2\n").unwrap();
        assert!(matches!(
            parse_constraints("A <\n", &mut model),
            Err(Error::MalformedConstraintLine(_))
        ));
        assert!(matches!(
            parse_constraints("A <= B\n", &mut model),
            Err(Error::UnknownOperator(_))
        ));
        assert!(matches!(
            parse_constraints("A < Z\n", &mut model),
            Err(Error::UnknownVariable(_))
        ));
    }
}
