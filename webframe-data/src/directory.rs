//! Directory state and its pure view.

use crate::project::Project;

/// Filter text plus the fetched projects in API order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    filter: String,
    projects: Vec<Project>,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Replace the whole collection after a fetch completes.
    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Projects matching the current filter, in source order.
    pub fn visible(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.matches(&self.filter))
            .collect()
    }

    pub fn render(&self, loading: bool) -> DirectoryView {
        let rows: Vec<ProjectRow> = self
            .visible()
            .into_iter()
            .map(|p| ProjectRow {
                label: p.domain.clone(),
                description: p.description.clone().filter(|d| !d.is_empty()),
            })
            .collect();

        let status = if loading {
            Some("Loading projects...".to_string())
        } else if self.projects.is_empty() {
            Some("No projects available".to_string())
        } else if rows.is_empty() {
            Some(format!("No projects match \"{}\"", self.filter))
        } else {
            None
        };

        let summary = if self.filter.is_empty() {
            format!("{} projects", self.projects.len())
        } else {
            format!("{} of {} projects", rows.len(), self.projects.len())
        };

        DirectoryView { rows, summary, status }
    }
}

/// One visible list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub label: String,
    pub description: Option<String>,
}

/// Everything the list screen needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryView {
    pub rows: Vec<ProjectRow>,
    pub summary: String,
    /// Loading / empty / no-match hint shown instead of (or above) the rows
    pub status: Option<String>,
}
