//! Catalog lookup errors.

use bc_core::{BcError, ComponentId, ReactionId, Real, ReagentId};
use thiserror::Error;

/// Result type for catalog queries.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown component id {0}")]
    UnknownComponent(ComponentId),

    #[error("Unknown reagent id {0}")]
    UnknownReagent(ReagentId),

    #[error("Unknown reaction id {0}")]
    UnknownReaction(ReactionId),

    #[error("No molar weight recorded for formula '{formula}'")]
    UnknownFormula { formula: String },

    #[error("Duplicate stoichiometric link: reagent {reagent} already links component {component}")]
    DuplicateLink {
        reagent: ReagentId,
        component: ComponentId,
    },

    #[error("Invalid stoichiometric coefficient {coefficient} linking reagent {reagent} and component {component}")]
    InvalidCoefficient {
        reagent: ReagentId,
        component: ComponentId,
        coefficient: Real,
    },
}

impl From<CatalogError> for BcError {
    fn from(err: CatalogError) -> Self {
        // Convert to BcError while preserving context
        BcError::InvalidArg {
            what: Box::leak(format!("Catalog lookup failed: {}", err).into_boxed_str()),
        }
    }
}
