//! Console adapters: interactive input and report rendering.

pub mod chart;
pub mod prompt;
pub mod report;

pub use prompt::InteractivePrompt;
pub use report::ConsoleReport;
