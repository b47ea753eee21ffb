//! Core agent types: actions, RNG, configuration, errors.
//!
//! These are world-agnostic building blocks shared by every agent.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::Direction;
pub use config::{AgentConfig, EmptyPoolPolicy};
pub use error::{AgentError, Result};
pub use rng::AgentRng;
