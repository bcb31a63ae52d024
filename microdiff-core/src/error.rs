use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the microdiff engine.
///
/// Every failure is raised synchronously at the call site that detects it and
/// leaves no global state behind, so callers can retry with corrected inputs.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MicrodiffError {
    #[error("Non-finite value {value} assigned to {field}")]
    NonFiniteValue { field: &'static str, value: f64 },

    #[error("Domain violation in {operation}: {reason}")]
    DomainViolation {
        operation: &'static str,
        reason: String,
    },

    #[error("Invalid derivative order {0}: order must be at least 1")]
    InvalidOrder(u32),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("Node {0} does not belong to this graph")]
    UnknownNode(NodeId),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl MicrodiffError {
    pub(crate) fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        MicrodiffError::DomainViolation {
            operation,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MicrodiffError>;
