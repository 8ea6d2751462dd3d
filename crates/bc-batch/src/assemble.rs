//! Assembly of the linear system from catalog data and selections.

use crate::error::{BatchError, BatchResult};
use crate::fractions::{self, LinkedComponent};
use crate::session::{SelectedComponent, SelectedReagent};
use bc_catalog::CatalogSource;
use bc_core::Real;
use nalgebra::{DMatrix, DVector};

/// Join every selected reagent's stoichiometric links with the component
/// records they reference, in reagent selection order.
pub(crate) fn link_snapshot(
    catalog: &dyn CatalogSource,
    reagents: &[SelectedReagent],
) -> BatchResult<Vec<Vec<LinkedComponent>>> {
    let mut snapshot = Vec::with_capacity(reagents.len());
    for sel in reagents {
        let links = catalog.links_for_reagent(sel.record.id)?;
        let mut joined = Vec::with_capacity(links.len());
        for link in links {
            joined.push(LinkedComponent {
                component: catalog.component(link.component)?,
                link,
            });
        }
        snapshot.push(joined);
    }
    Ok(snapshot)
}

/// Every selected component must be reachable from at least one selected
/// reagent, otherwise its column of the system is structurally zero.
pub(crate) fn check_coverage(
    components: &[SelectedComponent],
    snapshot: &[Vec<LinkedComponent>],
) -> BatchResult<()> {
    for sel in components {
        let covered = snapshot
            .iter()
            .flatten()
            .any(|l| l.link.component == sel.record.id);
        if !covered {
            return Err(BatchError::Validation {
                what: format!(
                    "Component '{}' is not provided by any selected reagent",
                    sel.record.label()
                ),
            });
        }
    }
    Ok(())
}

/// Right-hand side: grams of each target component the batch must deliver.
pub(crate) fn target_mass_vector(components: &[SelectedComponent]) -> DVector<Real> {
    DVector::from_iterator(components.len(), components.iter().map(SelectedComponent::mass))
}

/// One row per reagent: the weight fraction of each selected component
/// delivered by a gram of that reagent. Fractions for unselected components
/// are dropped, which is what makes impure reagents balance against an
/// explicit water column.
pub(crate) fn batch_matrix(
    reagents: &[SelectedReagent],
    snapshot: &[Vec<LinkedComponent>],
    components: &[SelectedComponent],
    water_molar_weight: Option<Real>,
) -> BatchResult<DMatrix<Real>> {
    let mut b = DMatrix::zeros(reagents.len(), components.len());
    for (row, (sel, links)) in reagents.iter().zip(snapshot).enumerate() {
        let fractions = fractions::weight_fractions(sel.chemistry(), links, water_molar_weight)?;
        for (component, wf) in fractions {
            if let Some(col) = components.iter().position(|c| c.record.id == component) {
                b[(row, col)] = wf;
            }
        }
    }
    Ok(b)
}
