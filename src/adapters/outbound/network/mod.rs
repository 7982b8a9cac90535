/// Network adapters for external API calls
mod pypi_client;

pub use pypi_client::{PyPiIndexClient, DEFAULT_INDEX_URL};
