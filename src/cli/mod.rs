//! Command-line demo support: sample graphs and printing commands.

pub mod commands;
pub mod samples;

pub use samples::Sample;
