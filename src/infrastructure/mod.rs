//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer handles all I/O.
//!
//! ## Structure
//!
//! - `scanner` - Directory walk producing the asset manifest
//! - `ignore` - `.folioignore` matching
//! - `fs/` - Local file access and atomic writes

pub mod fs;
pub mod ignore;
pub mod scanner;

pub use fs::LocalFs;
pub use ignore::IgnorePatterns;
pub use scanner::FsAssetScanner;
