use crate::requirements_generation::domain::Requirement;
use crate::requirements_generation::policies::NameMatching;
use crate::shared::Result;
use std::collections::{BTreeSet, HashSet};

/// RequirementsGenerator intersects available and used packages
///
/// Pure logic: the caller decides where the rendered file goes.
pub struct RequirementsGenerator;

impl RequirementsGenerator {
    /// Computes the final package set
    ///
    /// With `NameMatching::Exact` the result is the plain string
    /// intersection. With `NameMatching::Normalized` an available entry
    /// matches when its project name normalizes to the same key as a used
    /// name, and the declared project name is emitted.
    ///
    /// The result is sorted and free of duplicates.
    pub fn intersect(
        available: &[String],
        used: &[String],
        matching: NameMatching,
    ) -> Result<Vec<String>> {
        let used_keys: HashSet<String> = used.iter().map(|name| matching.key(name)).collect();
        let mut final_packages = BTreeSet::new();

        for package in available {
            let emitted = match matching {
                NameMatching::Exact => package.clone(),
                NameMatching::Normalized => Requirement::parse(package)?.name().to_string(),
            };

            if used_keys.contains(&matching.key(&emitted)) {
                final_packages.insert(emitted);
            }
        }

        Ok(final_packages.into_iter().collect())
    }

    /// Renders the requirements file: one name per line, no pins
    pub fn render(packages: &[String]) -> String {
        packages
            .iter()
            .map(|package| format!("{}\n", package))
            .collect()
    }
}
