//! Domain Services
//!
//! Stateless functions over domain entities. No I/O.

pub mod description;
pub mod loader;
pub mod title;

pub use description::{
    is_trimmed_whitespace, parse_description_file, ParsedDescription, DEFAULT_CATEGORY,
};
pub use loader::{load_projects, project_columns, ProjectColumns};
pub use title::filename_to_title;
