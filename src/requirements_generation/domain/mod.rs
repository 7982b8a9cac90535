pub mod environment;
pub mod package;
pub mod requirement;

pub use environment::{DependencyDeclaration, EnvironmentSpec};
pub use package::PackageName;
pub use requirement::Requirement;
