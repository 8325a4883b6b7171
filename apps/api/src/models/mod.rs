pub mod candidate;
pub mod email_log;
pub mod job;
