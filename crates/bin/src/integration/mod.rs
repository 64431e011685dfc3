//! Integration modules for the Hobart CLI.
//!
//! Wires the library crates together for the subcommands.

pub(crate) mod analysis;
