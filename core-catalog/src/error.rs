use thiserror::Error;

/// Failures raised while wiring or configuring the catalog core.
///
/// Search failures are not represented here; those carry the
/// [`CatalogError`](catalog_traits::CatalogError) taxonomy.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },
}

pub type Result<T> = std::result::Result<T, SetupError>;
