//! Common test utilities for Folio CLI and contract tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus config home
//! - Fixtures: Reusable asset layouts

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
