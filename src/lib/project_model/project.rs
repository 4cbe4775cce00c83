use std::path::PathBuf;

use serde::Deserialize;

use super::target::SourceTarget;

/// A named collection of targets sharing a root directory
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SourceProject {
    pub name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub targets: Vec<SourceTarget>,
}
