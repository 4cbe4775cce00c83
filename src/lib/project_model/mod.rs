//! The project graph exported by the project generation tool, as consumed by the
//! generator. Every path found on it is absolute.

pub mod loader;
pub mod project;
pub mod target;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use self::project::SourceProject;

/// The whole graph of a workspace: every project keyed by the path of its root
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SourceGraph {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: PathBuf,
    #[serde(default)]
    pub projects: IndexMap<String, SourceProject>,
}

impl SourceGraph {
    /// Looks for the project with the given name
    pub fn project(&self, name: &str) -> Option<&SourceProject> {
        self.projects.values().find(|project| project.name == name)
    }

    /// The names of every project of the graph, in the order in which they were loaded
    pub fn project_names(&self) -> Vec<&str> {
        self.projects
            .values()
            .map(|project| project.name.as_str())
            .collect()
    }
}
