//! Error types for batch calculations.

use bc_catalog::CatalogError;
use bc_core::BcError;
use thiserror::Error;

/// Errors raised while building or solving a batch.
///
/// Every message carries the entity names and counts needed to display it
/// directly to the user; nothing is retried automatically.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Structural preconditions violated: empty or mismatched selections,
    /// missing coverage, invalid rescale parameters.
    #[error("Validation error: {what}")]
    Validation { what: String },

    /// A reagent's kind/link-count combination matches no modeled chemistry
    /// rule.
    #[error("Unsupported reagent configuration: {what}")]
    Unsupported { what: String },

    /// The composition string yielded no usable component although output was
    /// required.
    #[error("Composition parse error: {what}")]
    Parse { what: String },

    /// The assembled linear system is singular or not square.
    #[error("Numeric error: {what}")]
    Numeric { what: String },

    /// A catalog lookup failed mid-assembly.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub type BatchResult<T> = Result<T, BatchError>;

impl From<BcError> for BatchError {
    fn from(err: BcError) -> Self {
        // Numeric argument guards surface as validation failures
        BatchError::Validation {
            what: err.to_string(),
        }
    }
}
