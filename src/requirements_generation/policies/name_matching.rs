use crate::requirements_generation::domain::package::normalize_name;

/// How available and used package names are compared when intersecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatching {
    /// Case-sensitive exact string comparison
    #[default]
    Exact,
    /// PEP 503 normalized comparison (`PyYAML` matches `pyyaml`)
    Normalized,
}

impl NameMatching {
    /// Builds a policy from the `normalize_names` switch
    pub fn from_normalize_flag(normalize: bool) -> Self {
        if normalize {
            NameMatching::Normalized
        } else {
            NameMatching::Exact
        }
    }

    /// The comparison key for a name under this policy
    pub fn key(&self, name: &str) -> String {
        match self {
            NameMatching::Exact => name.to_string(),
            NameMatching::Normalized => normalize_name(name.trim()),
        }
    }
}
