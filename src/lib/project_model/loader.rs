//! Sources of the project graph

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;

use crate::utils::constants::{error_messages, GRAPH_FILE_NAME, TUIST_BINARY};

use super::SourceGraph;

/// Loads the project graph of the workspace rooted at `root`
pub trait GraphLoader {
    fn load_graph(&self, root: &Path) -> Result<SourceGraph>;
}

/// Reads a graph previously exported as JSON by the project tool
#[derive(Debug, Clone)]
pub struct JsonGraphLoader {
    pub file: PathBuf,
}

impl JsonGraphLoader {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }
}

impl GraphLoader for JsonGraphLoader {
    fn load_graph(&self, _root: &Path) -> Result<SourceGraph> {
        log::debug!("Reading the project graph from {:?}", self.file);
        let raw = fs::read_to_string(&self.file)
            .with_context(|| format!("{}: {:?}", error_messages::READ_GRAPH_FILE, self.file))?;
        parse_graph(&raw)
            .with_context(|| format!("{}: {:?}", error_messages::PARSE_GRAPH_FILE, self.file))
    }
}

pub fn parse_graph(raw: &str) -> Result<SourceGraph> {
    Ok(serde_json::from_str(raw)?)
}

/// Asks the project tool to export the graph into a throw-away directory, and reads
/// it back from there
#[derive(Debug, Clone, Default)]
pub struct TuistGraphLoader;

impl TuistGraphLoader {
    fn arguments<'a>(root: &'a Path, output: &'a Path) -> [&'a std::ffi::OsStr; 8] {
        [
            "graph".as_ref(),
            "--format".as_ref(),
            "json".as_ref(),
            "--no-open".as_ref(),
            "--path".as_ref(),
            root.as_os_str(),
            "--output-path".as_ref(),
            output.as_os_str(),
        ]
    }
}

impl GraphLoader for TuistGraphLoader {
    fn load_graph(&self, root: &Path) -> Result<SourceGraph> {
        let output_dir = tempfile::tempdir()?;
        let args = Self::arguments(root, output_dir.path());
        log::debug!("Executing {TUIST_BINARY} with {args:?}");

        let status = std::process::Command::new(TUIST_BINARY)
            .args(args)
            .spawn()
            .with_context(|| error_messages::FAILURE_LAUNCHING_TUIST)?
            .wait()
            .with_context(|| error_messages::FAILURE_LAUNCHING_TUIST)?;

        if !status.success() {
            return Err(eyre!("{} ({status})", error_messages::TUIST_GRAPH_FAILED));
        }

        JsonGraphLoader::new(output_dir.path().join(GRAPH_FILE_NAME)).load_graph(root)
    }
}
