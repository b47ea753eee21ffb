//! Error types.
//!
//! Budget depletion and "no goal within reach" are ordinary search outcomes
//! and never surface here; they resolve through fallback selection.

/// Errors an agent can return from a decision.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The state offers no legal action, so no member of the legal set exists to return.
    #[error("no legal actions available from current state")]
    NoLegalActions,
}

/// Result type for agent decisions.
pub type Result<T> = std::result::Result<T, AgentError>;
