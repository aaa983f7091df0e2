//! Passcheck: password validation against a fixed, ordered rule set.
//!
//! The core is [`validate::validate`], a pure function returning a
//! [`validate::Verdict`]. The remaining modules are the `passcheck` CLI
//! built around it: argument parsing, configuration, logging, and the
//! validation service that logs outcomes and contains validator faults.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod service;
pub mod validate;

pub use error::{PasscheckError, Result};
pub use validate::{PasswordValidator, Rule, RuleSetValidator, Verdict, validate};
