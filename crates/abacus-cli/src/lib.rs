//! Command-line host for the Abacus calculator catalog.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
