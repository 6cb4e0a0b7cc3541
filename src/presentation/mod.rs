//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases from configuration
//! - Output formatting (text/JSON)
//! - Logging setup

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_build_use_case, Settings};
pub use logging::init_logging;
