use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while loading or constructing a problem model.
///
/// The search itself has no error conditions: rejection and exhaustion are
/// ordinary outcomes of backtracking, and an unsatisfiable model is a valid
/// result, not an error. Everything here is a load-time precondition
/// violation, reported before the engine ever runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate variable `{0}`")]
    DuplicateVariable(String),

    #[error("variable `{0}` has an empty domain")]
    EmptyDomain(String),

    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    #[error("malformed variable line: `{0}`")]
    MalformedVariableLine(String),

    #[error("malformed constraint line: `{0}`")]
    MalformedConstraintLine(String),

    #[error("unknown constraint operator `{0}` (expected one of `=`, `!`, `<`, `>`)")]
    UnknownOperator(String),

    #[error("a constraint must relate two distinct variables, got `{0}` on both sides")]
    SelfConstraint(String),

    #[error("invalid domain value `{0}`")]
    InvalidDomainValue(String),
}
