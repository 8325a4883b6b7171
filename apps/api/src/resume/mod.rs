//! Résumé parsing: AI extraction with a regex-based safety net.

pub mod fallback;
pub mod parser;
pub mod prompts;
