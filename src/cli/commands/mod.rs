//! Subcommands of the rankmax CLI

pub mod pagerank;
pub mod play;
pub mod solve;
