//! Path resolution helpers used to turn the absolute locations found on the project
//! graph into the relative, `/` separated paths that a package manifest expects.
//!
//! Two relativization policies coexist and every call site must pick the one whose
//! precondition holds there:
//!
//! - [`strict_suffix`] requires the base to be an ancestor of the path, and just drops
//!   the shared prefix. Resources are always located below the source root of their
//!   target, so they are relativized this way.
//! - [`full_relative`] makes no assumption about the base, climbing with `..` out of
//!   every component of the base that is not shared with the path. A target's source
//!   folder is not required to live inside the project root, so it is relativized
//!   this way.

use std::path::{Component, Path, PathBuf};

const SEPARATOR: &str = "/";
const PARENT_DIR: &str = "..";
const CURRENT_DIR: &str = ".";

/// Returns the deepest directory shared by every path of the sequence, compared
/// component by component from the root. [`None`] is only returned for an empty input
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use spm_gen::utils::paths::common_ancestor;
///
/// let paths = [Path::new("/root/App/Sources/Feature"), Path::new("/root/App/Sources/Core")];
/// assert_eq!(common_ancestor(&paths), Some(PathBuf::from("/root/App/Sources")));
/// assert_eq!(common_ancestor::<&Path>(&[]), None);
/// ```
pub fn common_ancestor<P: AsRef<Path>>(paths: &[P]) -> Option<PathBuf> {
    let (first, rest) = paths.split_first()?;
    let mut shared: Vec<Component<'_>> = first.as_ref().components().collect();

    for path in rest {
        let matching = shared
            .iter()
            .zip(path.as_ref().components())
            .take_while(|(lhs, rhs)| **lhs == *rhs)
            .count();
        shared.truncate(matching);
    }

    Some(shared.iter().collect())
}

/// The folder that contains a source entry. Entries declared with a trailing separator,
/// or that are directories on the file system, are their own folder
pub fn source_folder(source: &Path) -> &Path {
    let declared_as_dir = source.as_os_str().to_string_lossy().ends_with(SEPARATOR);
    if declared_as_dir || source.is_dir() {
        source
    } else {
        source.parent().unwrap_or(source)
    }
}

/// The common folder of a set of source files, that is, the [`common_ancestor`] of the
/// folders that contain each one of them
pub fn source_root<P: AsRef<Path>>(sources: &[P]) -> Option<PathBuf> {
    let folders: Vec<&Path> = sources
        .iter()
        .map(|source| source_folder(source.as_ref()))
        .collect();
    common_ancestor(&folders)
}

/// Relative path from `base` to `path` under the *strict suffix* policy: `base` must be
/// an ancestor of (or equal to) `path`, otherwise [`None`] is returned
///
/// ```rust
/// use std::path::Path;
/// use spm_gen::utils::paths::strict_suffix;
///
/// let rel = strict_suffix(Path::new("/root/A/Assets.xcassets"), Path::new("/root/A"));
/// assert_eq!(rel.as_deref(), Some("Assets.xcassets"));
/// assert_eq!(strict_suffix(Path::new("/root/B/file"), Path::new("/root/A")), None);
/// ```
pub fn strict_suffix(path: &Path, base: &Path) -> Option<String> {
    path.strip_prefix(base)
        .ok()
        .map(|suffix| join(suffix.components()))
}

/// Relative path from `base` to `path` under the *full relative* policy: one `..` for
/// every component of `base` past the prefix shared with `path`, followed by the
/// remaining components of `path`
///
/// ```rust
/// use std::path::Path;
/// use spm_gen::utils::paths::full_relative;
///
/// assert_eq!(full_relative(Path::new("/root/App/Sources"), Path::new("/root/App")), "Sources");
/// assert_eq!(full_relative(Path::new("/shared/Core"), Path::new("/root/App")), "../../shared/Core");
/// ```
pub fn full_relative(path: &Path, base: &Path) -> String {
    let path_components: Vec<Component<'_>> = path.components().collect();
    let base_components: Vec<Component<'_>> = base.components().collect();

    let shared = path_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(lhs, rhs)| lhs == rhs)
        .count();

    let climbs = base_components[shared..]
        .iter()
        .map(|_| PARENT_DIR.to_string());
    let descents = path_components[shared..]
        .iter()
        .map(|component| component.as_os_str().to_string_lossy().into_owned());

    climbs.chain(descents).collect::<Vec<_>>().join(SEPARATOR)
}

/// A relative path as written on a manifest, where the empty path means the base itself
pub fn or_current_dir(relative: String) -> String {
    if relative.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        relative
    }
}

/// Applies a `/` separated relative path produced by this module over `base`, folding
/// `.` and `..` segments
pub fn resolve(base: &Path, relative: &str) -> PathBuf {
    let mut resolved = base.to_path_buf();
    for segment in relative.split(SEPARATOR) {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// The last component of a path, used as the identity of a package checkout
pub fn last_component(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn join<'a>(components: impl Iterator<Item = Component<'a>>) -> String {
    components
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
