//! CLI library components for the bank marketing splitter.

pub mod logging;
pub mod pipeline;
