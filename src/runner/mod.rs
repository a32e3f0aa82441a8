//! Check orchestration.
//!
//! - [`verifier`] - Runs the checks in order and prints the summary

pub mod verifier;

pub use verifier::{CheckResult, VerificationReport, Verifier};
