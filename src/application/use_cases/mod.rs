/// Use cases module containing application business logic orchestration
mod generate_requirements;

pub use generate_requirements::GenerateRequirementsUseCase;
