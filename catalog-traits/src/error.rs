use thiserror::Error;

/// Catalog failure taxonomy.
///
/// Every failure a search can hit is classified into one of three kinds so
/// that callers (and logs) can tell a dead network apart from an upstream
/// quota rejection or a payload the catalog should never have produced.
/// The user-facing collapse to an empty result set happens once, at the
/// service facade, never here.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network-level failure reaching the catalog API (DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The catalog answered with a non-success HTTP status (auth, quota,
    /// malformed request).
    #[error("catalog rejected the request (status {status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    /// The response body does not match the expected shape.
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
