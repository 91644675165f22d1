//! Error types for binding and overload resolution.
//!
//! These are contract violations to report upward, not recoverable
//! conditions: the analyzer applied a template to the wrong shape, or asked
//! for resolution over a set that cannot produce a winner.

use feel_types::FType;
use thiserror::Error;

/// A binding call violated the template's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("expected a function type, found `{found}`")]
    NotAFunction { found: FType },

    #[error("variadic template `{template}` must end in a list parameter")]
    InvalidVariadicTail { template: FType },

    #[error("parameter index {index} out of range for arity {arity}")]
    ParameterOutOfRange { index: usize, arity: usize },

    #[error("cannot bind concrete `{concrete}` against declared `{declared}`")]
    ShapeMismatch { declared: FType, concrete: FType },
}

/// Overload resolution could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("candidate set for `{name}` is empty")]
    EmptyCandidateSet { name: String },

    #[error("candidate for `{name}` is not a function: {source}")]
    InvalidCandidate {
        name: String,
        #[source]
        source: BindError,
    },
}
