//! Persistence adapters: JSONL session audit log.

pub mod session_log;

pub use session_log::SessionLogger;
