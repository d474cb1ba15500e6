//! Test support utilities for the betguide service.
//!
//! Shared by the integration test binaries: one-time tracing setup and
//! assertions for the Problem Details error contract.

pub mod problem_details;
pub mod test_logging;
