/// Domain layer - Pure logic for turning an environment into requirements
///
/// Nothing in here performs I/O; reading files, querying the index and
/// scanning sources happen through ports in the application layer.
pub mod domain;
pub mod policies;
pub mod services;
