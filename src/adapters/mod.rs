//! Adapters Layer - Concrete Port Implementations
//!
//! Console adapters (interactive prompt, report tables, terminal chart)
//! and the JSONL session logger.

pub mod console;
pub mod persistence;
