//! Matchbox learning system
//!
//! This module provides the matchbox memory structure and the learning
//! agent that trains it from game outcomes.

pub mod agent;
pub mod matchbox;

pub use agent::{AgentStats, LearningAgent, ReinforcementValues};
pub use matchbox::Matchbox;
