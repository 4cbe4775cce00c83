use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};
use walkdir::WalkDir;

use super::constants::{error_messages, XCODEPROJ_EXCLUDED_MARKERS, XCODEPROJ_SUFFIX};

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<PathBuf> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))?;

    Ok(file_path)
}

/// Gets the absolute route for an element in the system given a path P,
/// without the extended path prefix on Windows
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let canonical = project_root
        .canonicalize()
        .with_context(|| format!("Could not canonicalize {project_root:?}"))?;

    let as_str = canonical.to_string_lossy();
    if let Some(stripped) = as_str.strip_prefix(r"\\?\") {
        return Ok(PathBuf::from(stripped));
    }
    Ok(canonical)
}

/// Looks on the first level of `root` for the `*.xcodeproj` bundle generated for the
/// project, and returns its name without the extension.
///
/// Hidden entries and the bundles that the project tool generates for its own
/// manifests and plugins are ignored. When more than one candidate exists, the first
/// one in lexicographic order wins, so the result doesn't depend on the file system
pub fn find_xcodeproj_name(root: &Path) -> Result<Option<String>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| error_messages::FAILURE_LISTING_PROJECT_ROOT)?;
        let file_name = entry.file_name().to_string_lossy();

        if file_name.starts_with('.') {
            continue;
        }
        if XCODEPROJ_EXCLUDED_MARKERS
            .iter()
            .any(|marker| file_name.contains(marker))
        {
            continue;
        }
        if let Some(project_name) = file_name.strip_suffix(XCODEPROJ_SUFFIX) {
            candidates.push(project_name.to_string());
        }
    }

    log::debug!("Project bundles found on {root:?}: {candidates:?}");
    Ok(candidates.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_project_name_from_xcodeproj() -> Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("MyApp.xcodeproj"))?;
        fs::create_dir(temp.path().join("Tuist"))?;
        fs::write(temp.path().join("Project.swift"), "")?;

        assert_eq!(find_xcodeproj_name(temp.path())?, Some("MyApp".to_string()));
        Ok(())
    }

    #[test]
    fn test_generated_bundles_are_ignored() -> Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("Manifests.xcodeproj"))?;
        fs::create_dir(temp.path().join("Plugin.xcodeproj"))?;
        fs::create_dir(temp.path().join(".Hidden.xcodeproj"))?;

        assert_eq!(find_xcodeproj_name(temp.path())?, None);

        fs::create_dir(temp.path().join("Shop.xcodeproj"))?;
        assert_eq!(find_xcodeproj_name(temp.path())?, Some("Shop".to_string()));
        Ok(())
    }

    #[test]
    fn test_create_file_overwrites() -> Result<()> {
        let temp = tempdir()?;
        create_file(temp.path(), "Package.swift", b"first")?;
        let written = create_file(temp.path(), "Package.swift", b"second")?;

        assert_eq!(fs::read_to_string(written)?, "second");
        Ok(())
    }
}
