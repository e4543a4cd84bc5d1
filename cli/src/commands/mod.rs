//! CLI commands for the wordclass tool.

pub mod stats;
pub mod vocab;

pub use stats::StatsCommand;
pub use vocab::VocabCommand;
