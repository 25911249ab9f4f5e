//! Error types for catalog loading.

use crate::state::FieldKey;
use thiserror::Error;

/// Failure while loading an option catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document was not valid JSON for the expected shape.
    #[error("catalog document is malformed")]
    Parse {
        /// Decoder error detail.
        #[source]
        source: serde_json::Error,
    },
    /// A category offered no options.
    #[error("catalog category {} has no options", field.as_str())]
    EmptyCategory {
        /// Category without entries.
        field: FieldKey,
    },
    /// A default selection is missing from its category.
    #[error("default {value} for {} is not in the catalog", field.as_str())]
    DefaultNotInCatalog {
        /// Category whose default is missing.
        field: FieldKey,
        /// Underlying value of the offending default.
        value: String,
    },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
