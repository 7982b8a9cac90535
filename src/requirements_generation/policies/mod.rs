mod import_mapping;
mod name_matching;
mod stdlib_modules;

pub use import_mapping::distribution_for_import;
pub use name_matching::NameMatching;
pub use stdlib_modules::is_stdlib_module;
