//! # archgen CLI
//!
//! Shared pieces of the two binaries: `archgen` (description-driven
//! scaffolding) and `archgen-impl` (analysis-driven stub generation).
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / system error          |
//! |  2   | User / input error               |
//! |  3   | Resource not found               |
//! |  4   | Configuration error              |
//! |  5   | Unusable environment (no go.mod) |

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod reporter;
