//! Output Rendering
//!
//! Human-readable views of loaded projects. JSON output reuses the
//! records' own serialization.

use std::fmt::Write;

use crate::domain::entities::ProjectRecord;
use crate::domain::services::ProjectColumns;

/// One line per project
pub fn render_project_list(projects: &[ProjectRecord]) -> String {
    if projects.is_empty() {
        return "No projects found\n".to_string();
    }

    let mut out = String::new();
    for project in projects {
        let _ = writeln!(out, "{}", project_line(project));
        if !project.description().is_empty() {
            for line in project.description().lines() {
                let _ = writeln!(out, "      {}", line);
            }
        }
    }
    let _ = writeln!(out, "{} project{}", projects.len(), plural(projects.len()));
    out
}

/// Projects grouped under a heading per column
pub fn render_columns(columns: &ProjectColumns<'_>) -> String {
    let mut out = String::new();
    for (index, lane) in columns.iter().enumerate() {
        let _ = writeln!(out, "Column {} ({})", index + 1, lane.len());
        for project in lane {
            let _ = writeln!(out, "  #{} {}", project.id(), project.title());
        }
    }
    out
}

fn project_line(project: &ProjectRecord) -> String {
    let count = project.images().len();
    format!(
        "#{:<3} {}  [{}]  {} image{}  column {}",
        project.id(),
        project.title(),
        project.category(),
        count,
        plural(count),
        project.column().index() + 1
    )
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
