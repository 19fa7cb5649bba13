//! Financial well-being planning: a deterministic scoring and budgeting engine plus the
//! service plumbing that hands its result to a hosted model for a written explanation.

pub mod config;
pub mod error;
pub mod explain;
pub mod planner;
pub mod telemetry;
