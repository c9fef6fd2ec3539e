//! CLI functionality for the pgcast tool
//!
//! This module contains all CLI-related functionality including:
//! - Cast evaluation with the interpreted backend
//! - Code emission with the generation backend
//! - Source type checking
//! - Configuration loading and logging setup
//! - Output formatting

pub mod check;
pub mod config;
pub mod emit;
pub mod eval;
pub mod input;
pub mod logging;
pub mod output;
