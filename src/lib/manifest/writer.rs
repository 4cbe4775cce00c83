//! Assembles the final text of a `Package.swift` file: the fixed header followed by the
//! rendered package, with a last filtering pass over its lines

use crate::printer::{RenderError, Renderer};
use crate::utils::constants::residual_noise;

use super::describe::Describe;
use super::hooks::ManifestHooks;
use super::Package;

/// The manifest header. The last line opens the assignment of the top level value, so
/// the rendered package follows it on the same line
pub fn header(tools_version: &str) -> String {
    format!(
        "// swift-tools-version: {tools_version}\n\
         // The swift-tools-version declares the minimum version of Swift required to build this package.\n\
         \n\
         import PackageDescription\n\
         \n\
         let package = "
    )
}

/// Accumulates rendered text line by line, dropping the lines that never belong to a
/// manifest: blank ones, and the ones carrying an explicit absent value or a redundant
/// regular target type that slipped through the field hooks
#[derive(Debug, Default)]
pub struct ManifestWriter {
    logged: String,
}

impl ManifestWriter {
    pub fn new(tools_version: &str) -> Self {
        Self {
            logged: header(tools_version),
        }
    }

    /// A writer without header, that only filters what it receives
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        for line in text.lines() {
            self.handle_line(line);
        }
    }

    fn handle_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if line.contains(residual_noise::ABSENT_VALUE) {
            return;
        }
        if line.contains(residual_noise::REGULAR_TARGET_TYPE) {
            return;
        }

        self.logged.push_str(line);
        self.logged.push('\n');
    }

    pub fn finish(self) -> String {
        self.logged
    }
}

/// Runs the output filter alone over `text`
pub fn filter_lines(text: &str) -> String {
    let mut writer = ManifestWriter::headless();
    writer.write(text);
    writer.finish()
}

/// Renders `package` and assembles the complete manifest text
///
/// ```rust
/// use spm_gen::manifest::{Package, SourceLocation, Target, TargetKind};
/// use spm_gen::manifest::writer::render_manifest;
///
/// let package = Package {
///     name: "Shop".into(),
///     targets: vec![Target {
///         name: "Shop".into(),
///         kind: TargetKind::Regular,
///         dependencies: vec![],
///         location: SourceLocation::Path("Shop".into()),
///         resources: vec![],
///     }],
///     ..Default::default()
/// };
///
/// let manifest = render_manifest(&package, "5.7").unwrap();
/// assert!(manifest.starts_with("// swift-tools-version: 5.7\n"));
/// assert!(manifest.contains("let package = Package(\n    name: \"Shop\",\n"));
/// assert!(manifest.ends_with(")\n"));
/// ```
pub fn render_manifest(package: &Package, tools_version: &str) -> Result<String, RenderError> {
    let renderer = Renderer::new(ManifestHooks::new());
    let rendered = renderer.render(&package.describe())?;

    let mut writer = ManifestWriter::new(tools_version);
    writer.write(&rendered);
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Resource, SourceLocation, Target, TargetDependency, TargetKind};

    #[test]
    fn test_residual_noise_is_dropped() {
        let text = "Target(\n\n    name: \"A\",\n    condition: nil,\n    type: .regular,\n   \n)";
        assert_eq!(filter_lines(text), "Target(\n    name: \"A\",\n)\n");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let text = "a\n\n  b: nil\n  type: .regular,\n c\n";
        let once = filter_lines(text);
        assert_eq!(filter_lines(&once), once);
    }

    #[test]
    fn test_header_lines() {
        let manifest = ManifestWriter::new("5.9").finish();
        let lines: Vec<&str> = manifest.lines().collect();
        assert_eq!(lines[0], "// swift-tools-version: 5.9");
        assert!(lines.contains(&"import PackageDescription"));
        assert_eq!(lines.last(), Some(&"let package = "));
    }

    #[test]
    fn test_full_manifest() {
        let package = Package {
            name: "Shop".into(),
            targets: vec![
                Target {
                    name: "A".into(),
                    kind: TargetKind::Regular,
                    dependencies: vec![TargetDependency::Target { name: "B".into() }],
                    location: SourceLocation::Path("A".into()),
                    resources: vec![Resource::Copy("Assets.xcassets".into())],
                },
                Target {
                    name: "B".into(),
                    kind: TargetKind::Regular,
                    dependencies: vec![],
                    location: SourceLocation::Path("B".into()),
                    resources: vec![],
                },
                Target {
                    name: "ATests".into(),
                    kind: TargetKind::Test,
                    dependencies: vec![TargetDependency::Target { name: "A".into() }],
                    location: SourceLocation::Sources(vec!["Tests/ATests.swift".into()]),
                    resources: vec![],
                },
            ],
            ..Default::default()
        };

        let expected = r#"// swift-tools-version: 5.7
// The swift-tools-version declares the minimum version of Swift required to build this package.

import PackageDescription

let package = Package(
    name: "Shop",
    targets: [
        .target(
            name: "A",
            dependencies: [
                "B",
            ],
            path: "A",
            resources: [
                .copy("Assets.xcassets"),
            ]
        ),
        .target(
            name: "B",
            path: "B"
        ),
        .testTarget(
            name: "ATests",
            dependencies: [
                "A",
            ],
            sources: [
                "Tests/ATests.swift",
            ]
        ),
    ]
)
"#;
        assert_eq!(render_manifest(&package, "5.7").unwrap(), expected);
    }
}
