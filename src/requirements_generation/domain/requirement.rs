use super::package::PackageName;
use crate::shared::error::ReqsError;
use crate::shared::Result;

/// Characters that may open a version specifier clause
const SPECIFIER_CHARS: &[char] = &['<', '>', '=', '!', '~'];

/// A candidate package parsed as a requirement line
///
/// Only the project name matters for index lookups; extras, version
/// specifiers, markers and direct URLs are validated for shape only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    name: PackageName,
}

impl Requirement {
    /// Parses a requirement line such as `requests`, `requests[socks]>=2.0`
    /// or `foo ; python_version < "3.11"`.
    ///
    /// # Errors
    /// Returns `ReqsError::MalformedRequirement` when the line has no project
    /// name, an unterminated extras bracket, an operator without a version,
    /// or trailing characters that cannot start a requirement clause.
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = |reason: String| -> anyhow::Error {
            ReqsError::MalformedRequirement {
                requirement: line.to_string(),
                reason,
            }
            .into()
        };

        let trimmed = line.trim();
        let name_end = trimmed
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'))
            .unwrap_or(trimmed.len());
        let (name, mut rest) = trimmed.split_at(name_end);

        if name.is_empty() {
            return Err(malformed("Requirement has no project name".to_string()));
        }
        let name = PackageName::new(name.to_string()).map_err(|e| malformed(e.to_string()))?;

        rest = rest.trim_start();
        if let Some(after_bracket) = rest.strip_prefix('[') {
            let close = after_bracket
                .find(']')
                .ok_or_else(|| malformed("Unterminated extras bracket".to_string()))?;
            rest = after_bracket[close + 1..].trim_start();
        }

        match rest.chars().next() {
            None | Some(';') | Some('@') | Some(',') => {}
            Some(c) if SPECIFIER_CHARS.contains(&c) => {
                let version = rest.trim_start_matches(SPECIFIER_CHARS).trim();
                if version.is_empty() {
                    return Err(malformed(format!(
                        "Version specifier '{}' has no version",
                        rest.trim()
                    )));
                }
            }
            Some('(') => {
                if !rest.contains(')') {
                    return Err(malformed("Unterminated version parenthesis".to_string()));
                }
            }
            Some(c) => {
                return Err(malformed(format!("Unexpected character '{}'", c)));
            }
        }

        Ok(Self { name })
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }
}
