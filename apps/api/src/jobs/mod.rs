//! Job postings.

pub mod handlers;
