use crate::ports::outbound::ImportScanner;
use crate::requirements_generation::policies::{distribution_for_import, is_stdlib_module};
use crate::requirements_generation::services::render_scan_output;
use crate::shared::error::ReqsError;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into (hidden directories are skipped too)
const IGNORED_DIRS: &[&str] = &["__pycache__", "node_modules", "site-packages", "venv", "env"];

static IMPORT_STMT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s+(.+)$").unwrap());
static FROM_IMPORT_STMT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^from\s+(\.*)([A-Za-z_][\w.]*)?\s+import\b").unwrap());
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*$").unwrap());

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<NotebookCell>,
}

#[derive(Debug, Deserialize)]
struct NotebookCell {
    cell_type: String,
    #[serde(default)]
    source: CellSource,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Text(String::new())
    }
}

impl CellSource {
    fn into_text(self) -> String {
        match self {
            CellSource::Lines(lines) => lines.concat(),
            CellSource::Text(text) => text,
        }
    }
}

/// Imports and locally defined module names collected from one source tree
#[derive(Debug, Default)]
struct ScanResult {
    imports: BTreeSet<String>,
    local_modules: HashSet<String>,
}

/// NativeImportScanner adapter that reads Python sources directly
///
/// Handles `.py` files and the code cells of `.ipynb` notebooks. Standard
/// library modules, relative imports and modules defined inside the scanned
/// tree are dropped; the rest are mapped to distribution names.
pub struct NativeImportScanner;

impl NativeImportScanner {
    pub fn new() -> Self {
        Self
    }

    fn is_ignored(entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || IGNORED_DIRS.contains(&name.as_ref())
    }

    fn collect(directory: &Path) -> Result<ScanResult> {
        let mut result = ScanResult::default();

        let entries = WalkDir::new(directory)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !Self::is_ignored(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file());

        for entry in entries {
            let path = entry.path();
            let source = match path.extension().and_then(|ext| ext.to_str()) {
                Some("py") => {
                    Self::record_local_module(path, &mut result.local_modules);
                    Self::read_source(path)?
                }
                Some("ipynb") => Self::read_source(path)?.and_then(|raw| notebook_code(&raw)),
                _ => None,
            };

            if let Some(source) = source {
                result.imports.extend(extract_imports(&source));
            }
        }

        Ok(result)
    }

    /// A `.py` file defines a module named after its stem, and makes its
    /// parent directory importable as a package.
    fn record_local_module(path: &Path, local_modules: &mut HashSet<String>) {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if stem != "__init__" {
                local_modules.insert(stem.to_string());
            }
        }
        if let Some(parent) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        {
            local_modules.insert(parent.to_string());
        }
    }

    /// Reads a source file; files that are too large or not UTF-8 are skipped
    fn read_source(path: &Path) -> Result<Option<String>> {
        let metadata = fs::metadata(path).map_err(|e| scan_error(path, e.to_string()))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(|e| scan_error(path, e.to_string()))?;
        Ok(String::from_utf8(bytes).ok())
    }
}

impl Default for NativeImportScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImportScanner for NativeImportScanner {
    async fn scan_directory(&self, directory: &Path, output_file: &Path) -> Result<()> {
        if !directory.is_dir() {
            return Err(scan_error(directory, "Not a directory".to_string()));
        }

        let result = Self::collect(directory)?;
        let distributions: BTreeSet<&str> = result
            .imports
            .iter()
            .filter(|module| !is_stdlib_module(module))
            .filter(|module| !result.local_modules.contains(module.as_str()))
            .map(|module| distribution_for_import(module))
            .collect();

        fs::write(output_file, render_scan_output(distributions)).map_err(|e| {
            scan_error(
                directory,
                format!("Failed to write {}: {}", output_file.display(), e),
            )
        })?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

fn scan_error(directory: &Path, details: String) -> anyhow::Error {
    ReqsError::ScannerError {
        directory: directory.to_path_buf(),
        details,
    }
    .into()
}

/// Extracts the code of a notebook, dropping IPython magics and shell escapes
///
/// Returns `None` when the document is not a readable notebook.
fn notebook_code(raw: &str) -> Option<String> {
    let notebook: Notebook = serde_json::from_str(raw).ok()?;
    let mut code = String::new();

    for cell in notebook.cells {
        if cell.cell_type != "code" {
            continue;
        }
        for line in cell.source.into_text().lines() {
            let trimmed = line.trim_start();
            if trimmed.starts_with('%') || trimmed.starts_with('!') {
                continue;
            }
            code.push_str(line);
            code.push('\n');
        }
    }

    Some(code)
}

/// Extracts absolute top-level module names from Python source
fn extract_imports(source: &str) -> BTreeSet<String> {
    let mut modules = BTreeSet::new();

    for line in source.lines() {
        let code = line.split('#').next().unwrap_or_default();

        for statement in code.split(';').map(str::trim) {
            if let Some(caps) = FROM_IMPORT_STMT.captures(statement) {
                let is_relative = caps.get(1).is_some_and(|dots| !dots.as_str().is_empty());
                if is_relative {
                    continue;
                }
                if let Some(module) = caps.get(2) {
                    insert_top_level(module.as_str(), &mut modules);
                }
            } else if let Some(caps) = IMPORT_STMT.captures(statement) {
                for clause in caps[1].split(',') {
                    if let Some(module) = clause.split_whitespace().next() {
                        insert_top_level(module, &mut modules);
                    }
                }
            }
        }
    }

    modules
}

fn insert_top_level(module: &str, modules: &mut BTreeSet<String>) {
    let top_level = module.split('.').next().unwrap_or_default();
    if IDENTIFIER.is_match(top_level) {
        modules.insert(top_level.to_string());
    }
}
