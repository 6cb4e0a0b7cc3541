//! Description file parsing
//!
//! A description file holds the category on its first line and free-form
//! description text on the remaining lines:
//!
//! ```text
//! 3D Visualization
//! Rendered in Blender.
//! Three weeks of work.
//! ```

/// Category used when a project has no description or an empty first line
pub const DEFAULT_CATEGORY: &str = "Project";

/// Category and description parsed from a description file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDescription {
    pub category: String,
    pub description: String,
}

impl Default for ParsedDescription {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
        }
    }
}

/// Whitespace stripped from description text: Unicode whitespace except
/// NEL, plus the byte-order mark editors prepend to UTF-8 files
pub fn is_trimmed_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn trim_text(text: &str) -> &str {
    text.trim_matches(is_trimmed_whitespace)
}

/// Parse raw description text. Absent and blank content yield the defaults.
pub fn parse_description_file(content: Option<&str>) -> ParsedDescription {
    let content = trim_text(content.unwrap_or_default());
    if content.is_empty() {
        return ParsedDescription::default();
    }

    let mut lines = content.split('\n');
    let category = lines
        .next()
        .map(trim_text)
        .filter(|line| !line.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();
    let description = trim_text(&lines.collect::<Vec<_>>().join("\n")).to_string();

    ParsedDescription {
        category,
        description,
    }
}
