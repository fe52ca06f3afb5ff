//! Project file I/O.
//!
//! Projects are stored as plain JSON. The format preserves window ids and
//! insertion order, so a reloaded project estimates to exactly the same
//! numbers as the one that was saved.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::project::Project;

/// Writes a project to a JSON file.
///
/// # Example
/// ```no_run
/// use windowcalc::Project;
/// use windowcalc::io::write_project;
/// use std::path::Path;
///
/// let mut project = Project::new("site_a");
/// project.add_window();
/// write_project(Path::new("site_a.json"), &project).unwrap();
/// ```
pub fn write_project(path: &Path, project: &Project) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, project)
        .with_context(|| format!("Failed to serialize project to: {}", path.display()))?;

    Ok(())
}

/// Reads a project from a JSON file.
///
/// # Example
/// ```no_run
/// use windowcalc::io::read_project;
/// use std::path::Path;
///
/// let project = read_project(Path::new("site_a.json")).unwrap();
/// println!("Loaded project: {}", project.name);
/// ```
pub fn read_project(path: &Path) -> Result<Project> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let project: Project = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize project from: {}", path.display()))?;

    Ok(project)
}

/// Serializes a project to a JSON string.
///
/// Useful for in-memory operations or handing to a web front end.
pub fn to_project_string(project: &Project) -> Result<String> {
    serde_json::to_string_pretty(project).context("Failed to serialize project to string")
}

/// Deserializes a project from a JSON string.
pub fn from_project_string(json: &str) -> Result<Project> {
    serde_json::from_str(json).context("Failed to deserialize project from string")
}
