use crate::requirements_generation::domain::{DependencyDeclaration, EnvironmentSpec};

/// Characters that end the name part of a conda match-spec
const MATCH_SPEC_TERMINATORS: &[char] = &['=', '<', '>', '!', '~'];

/// DependencyExtractor turns environment declarations into candidate names
pub struct DependencyExtractor;

impl DependencyExtractor {
    /// Flattens the declarations of an environment into candidate names
    ///
    /// Conda specs are reduced to their bare name; pip entries are kept
    /// verbatim. Order follows the document, duplicates are preserved.
    pub fn extract(spec: &EnvironmentSpec) -> Vec<String> {
        let mut packages = Vec::new();

        for declaration in &spec.dependencies {
            match declaration {
                DependencyDeclaration::Spec(match_spec) => {
                    if let Some(name) = Self::candidate_name(match_spec) {
                        packages.push(name);
                    }
                }
                DependencyDeclaration::Pip { pip } => packages.extend(pip.iter().cloned()),
                DependencyDeclaration::Other(_) => {}
            }
        }

        packages
    }

    /// Strips the channel prefix and version pin from a conda match-spec
    ///
    /// `numpy=1.2` → `numpy`, `conda-forge::scipy>=1.10` → `scipy`,
    /// `python 3.11.*` → `python`. Returns `None` when nothing is left.
    pub fn candidate_name(match_spec: &str) -> Option<String> {
        let without_channel = match match_spec.rfind("::") {
            Some(index) => &match_spec[index + 2..],
            None => match_spec,
        };

        let name = without_channel
            .trim()
            .split(|c: char| MATCH_SPEC_TERMINATORS.contains(&c) || c.is_whitespace())
            .next()
            .unwrap_or_default();

        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
