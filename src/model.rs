//! The problem model: variables, their finite integer domains, and the
//! binary constraints relating them.
//!
//! Variables live in an arena ([`Model`]) and are addressed by stable
//! [`VariableId`] indices. Each [`Constraint`] stores the *index* of its
//! partner variable rather than a reference, so the model is a plain
//! acyclic value with no interior mutability. Constraints are always
//! installed in mirrored pairs: stating `A < B` gives `A` a `LessThan`
//! constraint pointing at `B` and `B` the inverse `GreaterThan` constraint
//! pointing at `A`, which lets every variable check all relations it
//! participates in from its own constraint list alone.

use std::{collections::HashMap, fmt, ops::Range};

use serde::Serialize;

use crate::error::{Error, Result};

/// Stable index of a variable within its [`Model`].
pub type VariableId = usize;

/// The remaining legal values of each still-unassigned variable.
///
/// Built on persistent collections so that each branch of the search can
/// hold its own copy cheaply; pruning always produces a new map rather than
/// mutating in place, which is what makes backtracking an act of simply
/// discarding state instead of undoing it.
pub type DomainMap = im::HashMap<VariableId, im::Vector<i64>>;

/// The comparison kind of a binary constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
}

impl Relation {
    /// Returns `true` iff the pair `(left, right)` fails this comparison.
    ///
    /// Total over all integer pairs; rejection is an expected outcome of
    /// search, never an error.
    pub fn violates(self, left: i64, right: i64) -> bool {
        match self {
            Relation::Equal => left != right,
            Relation::NotEqual => left == right,
            Relation::LessThan => left >= right,
            Relation::GreaterThan => left <= right,
        }
    }

    /// The relation seen from the other endpoint of the constraint.
    ///
    /// `Equal` and `NotEqual` are symmetric; `LessThan` and `GreaterThan`
    /// mirror each other.
    pub fn inverse(self) -> Self {
        match self {
            Relation::Equal => Relation::Equal,
            Relation::NotEqual => Relation::NotEqual,
            Relation::LessThan => Relation::GreaterThan,
            Relation::GreaterThan => Relation::LessThan,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "=",
            Relation::NotEqual => "!=",
            Relation::LessThan => "<",
            Relation::GreaterThan => ">",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A directional binary constraint, stored on its owning (left-hand)
/// variable and pointing at the partner on the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub relation: Relation,
    pub partner: VariableId,
}

/// A named variable with a fixed finite domain and its outgoing
/// constraints. Immutable once the model is built; the engine never
/// mutates a variable.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    domain: Vec<i64>,
    constraints: Vec<Constraint>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &[i64] {
        &self.domain
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// The arena of variables that makes up one CSP instance.
#[derive(Debug, Clone, Default)]
pub struct Model {
    variables: Vec<Variable>,
    index: HashMap<String, VariableId>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable with the given finite domain.
    ///
    /// Fails fast on duplicate names and empty domains, per the loader's
    /// obligation to hand the engine a well-formed model.
    pub fn add_variable(&mut self, name: impl Into<String>, domain: Vec<i64>) -> Result<VariableId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateVariable(name));
        }
        if domain.is_empty() {
            return Err(Error::EmptyDomain(name));
        }
        let id = self.variables.len();
        self.index.insert(name.clone(), id);
        self.variables.push(Variable {
            name,
            domain,
            constraints: Vec::new(),
        });
        Ok(id)
    }

    /// Installs the constraint `left relation right` together with its
    /// mirrored inverse on the right endpoint.
    ///
    /// Both ids must have been produced by this model's
    /// [`add_variable`](Self::add_variable).
    pub fn add_constraint(
        &mut self,
        left: VariableId,
        relation: Relation,
        right: VariableId,
    ) -> Result<()> {
        if left == right {
            return Err(Error::SelfConstraint(self.variables[left].name.clone()));
        }
        self.variables[left].constraints.push(Constraint {
            relation,
            partner: right,
        });
        self.variables[right].constraints.push(Constraint {
            relation: relation.inverse(),
            partner: left,
        });
        Ok(())
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn id_of(&self, name: &str) -> Option<VariableId> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All variable ids, in insertion order.
    pub fn ids(&self) -> Range<VariableId> {
        0..self.variables.len()
    }

    /// A domain map holding every variable's full static domain. The
    /// starting point of a solve in either propagation mode.
    pub fn initial_domains(&self) -> DomainMap {
        self.variables
            .iter()
            .enumerate()
            .map(|(id, var)| (id, var.domain.iter().copied().collect::<im::Vector<i64>>()))
            .collect()
    }
}

/// An insertion-ordered binding of variables to chosen domain values.
///
/// Each recursive call of the engine extends its own copy by one entry;
/// sibling branches never observe each other's bindings. Both underlying
/// collections are persistent, so [`bind`](Assignment::bind) shares
/// structure with the parent instead of deep-copying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    order: im::Vector<(VariableId, i64)>,
    values: im::HashMap<VariableId, i64>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: VariableId) -> Option<i64> {
        self.values.get(&var).copied()
    }

    pub fn contains(&self, var: VariableId) -> bool {
        self.values.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// A new assignment extended with `var = value`. The receiver is left
    /// untouched.
    pub fn bind(&self, var: VariableId, value: i64) -> Assignment {
        let mut order = self.order.clone();
        order.push_back((var, value));
        Assignment {
            order,
            values: self.values.update(var, value),
        }
    }

    /// The bindings in the order the variables were assigned.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i64)> + '_ {
        self.order.iter().copied()
    }

    /// The bindings rendered as `(name, value)` pairs, in assignment order.
    pub fn bindings(&self, model: &Model) -> Vec<(String, i64)> {
        self.order
            .iter()
            .map(|&(id, value)| (model.variable(id).name().to_string(), value))
            .collect()
    }
}
