//! Command-line front end for the bfsbench binary.

pub mod commands;
