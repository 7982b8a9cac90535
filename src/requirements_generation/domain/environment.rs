use serde::Deserialize;

/// One entry of the `dependencies` sequence in a conda environment file
///
/// Conda match-specs are plain strings; pip requirements live under a
/// single `pip` mapping. Anything else (numbers, unrelated mappings) is
/// captured by `Other` and ignored during extraction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DependencyDeclaration {
    Spec(String),
    Pip { pip: Vec<String> },
    Other(serde_yaml_ng::Value),
}

/// The subset of a conda `environment.yml` this tool cares about
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnvironmentSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub dependencies: Vec<DependencyDeclaration>,
}

impl EnvironmentSpec {
    /// Parses an environment document.
    ///
    /// An empty document or one without a `dependencies` key is a parse
    /// error, the same as invalid YAML syntax.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }
}
