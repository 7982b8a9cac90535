use clap::Parser;
use env2reqs::application::dto::ScannerKind;

/// Generate a requirements.txt from a conda environment file, keeping only
/// packages that exist on PyPI and are imported by the project's sources
#[derive(Parser, Debug)]
#[command(name = "env2reqs")]
#[command(version)]
#[command(about = "Generate requirements.txt from a conda environment file", long_about = None)]
pub struct Args {
    /// Path to the conda environment file [default: environment.yml]
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<String>,

    /// Source directory to scan for imports [default: src, notebooks]
    /// Can be specified multiple times: --source-dir src --source-dir scripts
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dirs: Vec<String>,

    /// Output file path, or "-" for stdout [default: requirements.txt]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Import scanner: native or pipreqs [default: native]
    #[arg(long)]
    pub scanner: Option<ScannerKind>,

    /// Base URL of the PyPI JSON API [default: https://pypi.org/pypi]
    #[arg(long = "index-url", value_name = "URL")]
    pub index_url: Option<String>,

    /// Compare package names after PEP 503 normalization
    #[arg(long)]
    pub normalize_names: bool,

    /// Path to a config file (defaults to env2reqs.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}
