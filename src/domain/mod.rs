//! Domain Layer
//!
//! Pure project-loading logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Asset manifest and project records
//! - `value_objects/` - Asset paths, ids, hints, hashes
//! - `services/` - Title derivation, description parsing, the loader
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
