//! Error types that do not depend on topology.
//!
//! Configuration-class errors ([`ParseTagError`], [`ParamError`]) are
//! raised before a simulation starts. [`StepError`] is the
//! invariant-violation class reported by the commit phase.

use crate::id::CellPos;
use crate::state::Model;
use std::error::Error;
use std::fmt;

/// A model or state tag did not name a known value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTagError {
    /// Unknown model name.
    UnknownModel {
        /// The rejected tag.
        tag: String,
    },
    /// Unknown state name.
    UnknownState {
        /// The rejected tag.
        tag: String,
    },
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModel { tag } => write!(f, "unknown model '{tag}'"),
            Self::UnknownState { tag } => write!(f, "unknown cell state '{tag}'"),
        }
    }
}

impl Error for ParseTagError {}

/// A rule-set parameter list or update was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// The parameter list length does not match the model.
    CountMismatch {
        /// Model the parameters were supplied for.
        model: Model,
        /// Count the model expects.
        expected: usize,
        /// Count supplied.
        got: usize,
    },
    /// A parameter index is beyond the model's parameter list.
    IndexOutOfRange {
        /// Model being tuned.
        model: Model,
        /// The offending index.
        index: usize,
        /// Number of parameters the model has.
        count: usize,
    },
    /// A parameter value is outside its legal range.
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the legal range.
        expected: &'static str,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch {
                model,
                expected,
                got,
            } => write!(f, "{model} expects {expected} parameters, got {got}"),
            Self::IndexOutOfRange {
                model,
                index,
                count,
            } => write!(
                f,
                "parameter index {index} out of range for {model} ({count} parameters)"
            ),
            Self::OutOfRange {
                name,
                value,
                expected,
            } => write!(f, "parameter '{name}' = {value} must be {expected}"),
        }
    }
}

impl Error for ParamError {}

/// Invariant violations detected while executing a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A cell reached the commit phase without a proposed state.
    Uncommitted {
        /// Position of the undecided cell.
        pos: CellPos,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncommitted { pos } => {
                write!(f, "cell {pos} reached commit without a proposed state")
            }
        }
    }
}

impl Error for StepError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ParamError::CountMismatch {
            model: Model::WaTor,
            expected: 4,
            got: 2,
        };
        assert_eq!(e.to_string(), "WaTor expects 4 parameters, got 2");

        let e = StepError::Uncommitted {
            pos: CellPos::new(2, 3),
        };
        assert_eq!(
            e.to_string(),
            "cell (2, 3) reached commit without a proposed state"
        );
    }
}
