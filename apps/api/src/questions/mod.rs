//! Interview question generation, personalized per candidate.

pub mod generator;
pub mod handlers;
pub mod prompts;
