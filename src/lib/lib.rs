pub mod cli;
pub mod config_file;
pub mod error;
pub mod manifest;
pub mod mapper;
pub mod printer;
pub mod project_model;
pub mod resolver;
pub mod settings;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use color_eyre::{eyre::Context, Result};

    use crate::{
        cli::input::CliArgs,
        error::GeneratorError,
        manifest::writer::render_manifest,
        mapper::ProjectMapper,
        project_model::{
            loader::{GraphLoader, JsonGraphLoader, TuistGraphLoader},
            SourceGraph,
        },
        resolver::{filter_package, filter_project},
        utils::{
            self,
            constants::{error_messages, MANIFEST_FILE_NAME},
            reader::load_settings,
        },
    };

    /// How a run of the generator ended
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Outcome {
        /// The manifest was written at the given path
        Written(PathBuf),
        /// The manifest was requested on the standard output. Printing it is up to the caller
        Printed(String),
        /// The graph has no project with the requested name. Nothing was generated
        ProjectNotFound { available: Vec<String> },
    }

    /// The main work of the project. Generates the manifest of the project selected by
    /// the [`CliArgs`]. `base_path` is the directory that relative paths given on the
    /// command line are resolved against
    pub fn run_generator(cli_args: &CliArgs, base_path: &Path) -> Result<Outcome> {
        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args, base_path)?;
        log::info!("Project root: {abs_project_root:?}");

        let config_path = cli_args.config.as_ref().map(|config| base_path.join(config));
        let settings = load_settings(&abs_project_root, config_path.as_deref())?;

        let project_name = determine_project_name(cli_args, &abs_project_root)?;
        log::info!("Project name: {project_name}");

        let load_graph_ts = Instant::now();
        let graph = graph_loader(cli_args, base_path)
            .load_graph(&abs_project_root)
            .with_context(|| error_messages::FAILURE_LOADING_GRAPH)?;
        log::debug!(
            "Loading the project graph took {:?} ms",
            load_graph_ts.elapsed().as_millis()
        );

        let Some(project) = graph.project(&project_name) else {
            return Ok(project_not_found(&project_name, &graph));
        };

        if cli_args.target_names.is_empty() {
            log::info!("No targets requested. Keeping every target of the project");
        } else {
            log::info!("Requested targets: {:?}", cli_args.target_names);
        }

        let project = filter_project(project, &cli_args.target_names)
            .with_context(|| error_messages::FAILURE_FILTERING_TARGETS)?;
        let package = ProjectMapper::new(&settings)
            .map_project(&project)
            .with_context(|| error_messages::FAILURE_MAPPING_PROJECT)?;
        let package = filter_package(package, &cli_args.target_names)
            .with_context(|| error_messages::FAILURE_FILTERING_TARGETS)?;
        let manifest = render_manifest(&package, &settings.tools_version)
            .map_err(GeneratorError::from)
            .with_context(|| error_messages::FAILURE_RENDERING_MANIFEST)?;

        if cli_args.stdout {
            return Ok(Outcome::Printed(manifest));
        }

        let written = utils::fs::create_file(
            &abs_project_root,
            MANIFEST_FILE_NAME,
            manifest.as_bytes(),
        )
        .with_context(|| error_messages::FAILURE_WRITING_MANIFEST)?;
        log::info!("{MANIFEST_FILE_NAME} written at {written:?}");

        Ok(Outcome::Written(written))
    }

    /// Resolves the full path of the location of the project's root on the fs. If the
    /// `--project-path` [`CliArgs`] arg is present, it will be used as the project root
    /// path (relative ones are resolved against `base_path`), otherwise, we will assume
    /// that the project root is `base_path` itself
    fn determine_absolute_path_of_the_project_root(
        cli_args: &CliArgs,
        base_path: &Path,
    ) -> Result<PathBuf> {
        let project_root = cli_args
            .project_path
            .as_deref()
            .map_or_else(|| base_path.to_path_buf(), |path| base_path.join(path));

        utils::fs::get_project_root_absolute_path(&project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

    fn determine_project_name(cli_args: &CliArgs, abs_project_root: &Path) -> Result<String> {
        if let Some(name) = cli_args.project_name.as_ref() {
            return Ok(name.clone());
        }

        let derived = utils::fs::find_xcodeproj_name(abs_project_root)?;
        derived.ok_or_else(|| {
            GeneratorError::MissingProjectName {
                root: abs_project_root.to_path_buf(),
            }
            .into()
        })
    }

    fn graph_loader(cli_args: &CliArgs, base_path: &Path) -> Box<dyn GraphLoader> {
        match cli_args.graph.as_ref() {
            Some(file) => Box::new(JsonGraphLoader::new(base_path.join(file))),
            None => Box::new(TuistGraphLoader),
        }
    }

    fn project_not_found(project_name: &str, graph: &SourceGraph) -> Outcome {
        let available: Vec<String> = graph
            .project_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        log::info!("Project `{project_name}` not found. Available projects:");
        for name in &available {
            log::info!("  - {name}");
        }

        Outcome::ProjectNotFound { available }
    }

}
