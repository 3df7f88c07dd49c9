//! Binary-local application orchestration helpers.
//!
//! `main.rs` keeps process wiring (exit codes, stderr), while this module
//! hosts startup and command dispatch so both stay testable.

pub(crate) mod commands;
pub(crate) mod startup;
