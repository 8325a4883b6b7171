//! Outreach email drafting, delivery and reply analysis.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sender;
pub mod sentiment;
