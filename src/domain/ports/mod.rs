//! Domain Ports
//!
//! Interfaces the infrastructure layer implements.

pub mod asset_source;

pub use asset_source::AssetSource;
