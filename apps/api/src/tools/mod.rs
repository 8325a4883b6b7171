//! Stateless "tools" endpoints: the parsing/scoring/email components
//! exposed over ad hoc input, with nothing persisted.

pub mod handlers;
