//! Use cases - Application orchestration.
//!
//! Wires the pure domain solver to the input/render/store ports for a
//! single synchronous analysis run.

pub mod curve;
pub mod session;

pub use session::AnalysisSession;
