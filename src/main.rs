mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use pom_resolve::adapters::outbound::console::StderrProgressReporter;
use pom_resolve::adapters::outbound::filesystem::{
    FileSystemReader, LocalArtifactVerifier, LocalPomRepository, XmlPomParser,
};
use pom_resolve::application::dto::{OutputFormat, ResolveRequest};
use pom_resolve::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pom_resolve::application::read_models::ResolutionReportBuilder;
use pom_resolve::application::use_cases::ResolveDependenciesUseCase;
use pom_resolve::shared::error::{ExitCode, ResolveError};
use pom_resolve::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(ExitCode::Success) => {}
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective run settings after merging the config file with CLI options
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    pom_root: PathBuf,
    artifact_root: PathBuf,
    exclude_patterns: Vec<String>,
    verify_artifacts: bool,
    strict: bool,
}

fn run(args: Args) -> Result<ExitCode> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?.unwrap_or_default();
    let bucket_names = config.bucket_names.clone().unwrap_or_default();
    let settings = merge_settings(cli_options(&args), config)?;

    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemReader::new();
    let pom_repository = LocalPomRepository::new(&settings.pom_root);
    let pom_parser = XmlPomParser::with_repository_root(&settings.pom_root);
    let artifact_verifier = LocalArtifactVerifier::new(Some(settings.artifact_root.clone()));
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ResolveDependenciesUseCase::new(
        manifest_reader,
        pom_repository,
        pom_parser,
        artifact_verifier,
        progress_reporter,
    );

    let request = ResolveRequest::new(
        project_path,
        settings.exclude_patterns.clone(),
        settings.verify_artifacts,
        bucket_names,
    );
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let report = ResolutionReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    if settings.strict && response.has_unresolved() {
        eprintln!("🚫 Unresolved dependencies remain (strict mode)");
        return Ok(ExitCode::UnresolvedDependencies);
    }

    Ok(ExitCode::Success)
}

/// Loads the config named by `--config`, or discovers one in the project directory
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        let config = load_config_from_path(path)?;
        eprintln!("⚙️  Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let config = discover_config(project_path)?;
    if config.is_some() {
        eprintln!(
            "⚙️  Auto-discovered config file: {}",
            project_path.join(CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

/// CLI options that take part in the config merge
#[derive(Debug, Default)]
struct CliOptions {
    format: Option<OutputFormat>,
    pom_root: Option<PathBuf>,
    artifact_root: Option<PathBuf>,
    exclude: Vec<String>,
    no_verify: bool,
    strict: bool,
}

fn cli_options(args: &Args) -> CliOptions {
    CliOptions {
        format: args.format,
        pom_root: args.pom_root.clone(),
        artifact_root: args.artifact_root.clone(),
        exclude: args.exclude.clone(),
        no_verify: args.no_verify,
        strict: args.strict,
    }
}

/// CLI values win over config values; exclude patterns from both are kept
fn merge_settings(cli: CliOptions, config: ConfigFile) -> Result<Settings> {
    let format = match (cli.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => value.parse().map_err(|e: String| ResolveError::Validation {
            message: format!("config field 'format': {}", e),
        })?,
        (None, None) => OutputFormat::default(),
    };

    let pom_root = match cli.pom_root.or(config.pom_root) {
        Some(root) => root,
        None => default_pom_root()?,
    };
    let artifact_root = cli
        .artifact_root
        .or(config.artifact_root)
        .unwrap_or_else(|| pom_root.clone());

    let mut exclude_patterns = config.exclude_dependencies.unwrap_or_default();
    for pattern in cli.exclude {
        if !exclude_patterns.contains(&pattern) {
            exclude_patterns.push(pattern);
        }
    }

    Ok(Settings {
        format,
        pom_root,
        artifact_root,
        exclude_patterns,
        verify_artifacts: !cli.no_verify && config.verify_artifacts.unwrap_or(true),
        strict: cli.strict || config.strict.unwrap_or(false),
    })
}

/// The Maven local repository of the current user
fn default_pom_root() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| ResolveError::Validation {
        message: "No POM root configured and $HOME is not set.\n\n💡 Hint: Pass --pom-root or set pom_root in pom-resolve.config.yml".to_string(),
    })?;
    Ok(PathBuf::from(home).join(".m2").join("repository"))
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() {
        return Err(ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
