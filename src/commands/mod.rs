//! Command implementations for the sqldict CLI

pub mod config;
pub mod scan;
