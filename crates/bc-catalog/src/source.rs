//! Read-only catalog query interface.

use crate::error::CatalogResult;
use crate::records::{Category, ComponentRecord, ReagentRecord, StoichiometricLink};
use bc_core::{ComponentId, Real, ReagentId};

/// Read-only access to the reagent/component catalog.
///
/// The calculator borrows a `&dyn CatalogSource` for the lifetime of a
/// session; implementations can be in-memory tables, fixtures, or adapters
/// over an external store. Implementations must be thread-safe (Send + Sync)
/// so that independent sessions can run on independent threads.
pub trait CatalogSource: Send + Sync {
    /// All components in a category, id-ordered.
    fn components_by_category(&self, category: Category) -> CatalogResult<Vec<ComponentRecord>>;

    /// Every reagent holding a stoichiometric link to at least one of the
    /// given components. Deduplicated and id-ordered.
    fn reagents_sourcing(&self, components: &[ComponentId]) -> CatalogResult<Vec<ReagentRecord>>;

    /// All stoichiometric links declared for a reagent.
    fn links_for_reagent(&self, reagent: ReagentId) -> CatalogResult<Vec<StoichiometricLink>>;

    /// Molar weight [g/mol] for a formula known to the catalog. Used at
    /// minimum to resolve the solvent in solution-kind reagents.
    fn molar_weight(&self, formula: &str) -> CatalogResult<Real>;

    /// Fetch a single component record.
    fn component(&self, id: ComponentId) -> CatalogResult<ComponentRecord>;

    /// Fetch a single reagent record.
    fn reagent(&self, id: ReagentId) -> CatalogResult<ReagentRecord>;
}
