//! Candidate upload and listing.

pub mod handlers;
