mod dependency_extractor;
mod requirements_generator;
mod scan_output;

pub use dependency_extractor::DependencyExtractor;
pub use requirements_generator::RequirementsGenerator;
pub use scan_output::{parse_scan_output, render_scan_output};
