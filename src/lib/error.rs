//! Failures of the generation pipeline with a meaning of their own. Everything else is
//! reported as a [`color_eyre::Report`] with the context of the failing step

use std::path::PathBuf;

use crate::printer::RenderError;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("no project name was given and none could be derived from {root:?}")]
    MissingProjectName { root: PathBuf },
    #[error("target `{target}` has no sources, so its source root can't be determined")]
    NoSourceRoot { target: String },
    #[error("target `{target}` has a dependency of an unsupported kind: {kind}")]
    UnsupportedDependencyKind { target: String, kind: String },
    #[error("dependency cycle between targets: {}", cycle.join(" -> "))]
    DependencyCycle { cycle: Vec<String> },
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_shows_the_path() {
        let err = GeneratorError::DependencyCycle {
            cycle: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(err.to_string(), "dependency cycle between targets: A -> B -> A");
    }

    #[test]
    fn test_render_errors_are_wrapped() {
        let err: GeneratorError = RenderError::UnsupportedResourceRule("embed".into()).into();
        assert_eq!(err.to_string(), "unsupported resource rule: embed");
    }
}
