mod cli;

use clap::Parser;
use cli::Args;
use env2reqs::adapters::outbound::console::StderrProgressReporter;
use env2reqs::adapters::outbound::filesystem::FileSystemReader;
use env2reqs::adapters::outbound::network::{PyPiIndexClient, DEFAULT_INDEX_URL};
use env2reqs::application::dto::{RequirementsRequest, ScannerKind};
use env2reqs::application::factories::{PresenterFactory, PresenterType, ScannerFactory};
use env2reqs::application::use_cases::GenerateRequirementsUseCase;
use env2reqs::config::{self, ConfigFile, CONFIG_FILENAME};
use env2reqs::requirements_generation::policies::NameMatching;
use env2reqs::shared::error::{ExitCode, ReqsError};
use env2reqs::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_ENVIRONMENT_FILE: &str = "environment.yml";
const DEFAULT_SOURCE_DIRS: [&str; 2] = ["src", "notebooks"];
const DEFAULT_OUTPUT: &str = "requirements.txt";

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, PartialEq)]
struct Settings {
    environment_file: PathBuf,
    source_dirs: Vec<PathBuf>,
    output: String,
    scanner: ScannerKind,
    index_url: String,
    normalize_names: bool,
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and must exit 0
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = merge_settings(args, config)?;

    validate_source_dirs(&settings.source_dirs)?;

    // Create adapters (Dependency Injection)
    let environment_reader = FileSystemReader::new();
    let package_index = PyPiIndexClient::with_index_url(&settings.index_url)?;
    let import_scanner = ScannerFactory::create(settings.scanner);
    let output_presenter = PresenterFactory::create(PresenterType::from_output(&settings.output));
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateRequirementsUseCase::new(
        environment_reader,
        package_index,
        import_scanner,
        output_presenter,
        progress_reporter,
    );

    let request = RequirementsRequest::builder()
        .environment_file(settings.environment_file)
        .source_dirs(settings.source_dirs)
        .name_matching(NameMatching::from_normalize_flag(settings.normalize_names))
        .build()?;

    use_case.execute(request).await?;

    Ok(())
}

/// Loads the explicit config file, or auto-discovers one in the current directory
fn load_config(explicit: Option<&str>) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        return config::load_config_from_path(Path::new(path)).map(Some);
    }

    let config = config::discover_config(Path::new("."))?;
    if config.is_some() {
        eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
    }
    Ok(config)
}

/// CLI flag > config file > built-in default
fn merge_settings(args: Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let environment_file = args
        .env_file
        .map(PathBuf::from)
        .or(config.environment_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENVIRONMENT_FILE));

    let source_dirs = if !args.source_dirs.is_empty() {
        args.source_dirs.into_iter().map(PathBuf::from).collect()
    } else if let Some(dirs) = config.source_dirs.clone() {
        dirs.into_iter().map(PathBuf::from).collect()
    } else {
        DEFAULT_SOURCE_DIRS.into_iter().map(PathBuf::from).collect()
    };

    let scanner = match args.scanner {
        Some(scanner) => scanner,
        None => config.scanner_kind()?.unwrap_or_default(),
    };

    let index_url = args
        .index_url
        .or(config.index_url)
        .unwrap_or_else(|| DEFAULT_INDEX_URL.to_string());
    config::validate_index_url(&index_url)?;

    Ok(Settings {
        environment_file,
        source_dirs,
        output: args
            .output
            .or(config.output)
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        scanner,
        index_url,
        normalize_names: args.normalize_names || config.normalize_names.unwrap_or(false),
    })
}

/// Rejects source paths that exist but are not directories
///
/// Missing directories are left for the use case, which skips them with a warning.
fn validate_source_dirs(source_dirs: &[PathBuf]) -> Result<()> {
    for path in source_dirs {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(ReqsError::InvalidSourceDirectory {
                    path: path.clone(),
                    reason: format!("Failed to read path metadata: {}", e),
                }
                .into())
            }
        };

        if !metadata.is_dir() {
            return Err(ReqsError::InvalidSourceDirectory {
                path: path.clone(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
