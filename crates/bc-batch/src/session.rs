//! Batch session: selections plus solver orchestration.
//!
//! A [`BatchSession`] borrows a catalog and accumulates the user's choices of
//! target components and stock reagents. Solving assembles the linear system
//! from weight fractions and writes the resulting masses back onto the
//! selected reagents, where rescaling operations can then adjust them to
//! laboratory amounts.

use crate::assemble;
use crate::error::{BatchError, BatchResult};
use crate::fractions::{self, ReagentChemistry};
use crate::rescale;
use crate::solve;
use bc_catalog::{CatalogSource, ComponentRecord, ReagentKind, ReagentRecord, WATER_FORMULA};
use bc_core::{ensure_finite, ComponentId, Real, ReagentId};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// A target component with its mole count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedComponent {
    pub record: ComponentRecord,
    /// Moles of this component per nominal batch.
    pub moles: Real,
}

impl SelectedComponent {
    /// Grams of this component the batch must deliver.
    pub fn mass(&self) -> Real {
        self.moles * self.record.molar_weight
    }
}

/// A stock chemical picked to source the batch, with its working
/// concentration and the last solved mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedReagent {
    pub record: ReagentRecord,
    /// Working concentration; starts at the catalog default.
    pub concentration: Real,
    /// Solved mass [g]; zero until a solve succeeds.
    pub mass: Real,
}

impl SelectedReagent {
    /// Volume [cm³] when the catalog records a positive density.
    pub fn volume(&self) -> Option<Real> {
        self.record
            .density
            .filter(|d| *d > 0.0)
            .map(|d| self.mass / d)
    }

    pub(crate) fn chemistry(&self) -> ReagentChemistry<'_> {
        ReagentChemistry {
            label: self.record.label(),
            kind: self.record.kind,
            molar_weight: self.record.molar_weight,
            concentration: self.concentration,
        }
    }
}

/// Selections and solver state over a borrowed catalog.
pub struct BatchSession<'a> {
    catalog: &'a dyn CatalogSource,
    components: Vec<SelectedComponent>,
    reagents: Vec<SelectedReagent>,
    batch_matrix: Option<DMatrix<Real>>,
}

impl<'a> BatchSession<'a> {
    pub fn new(catalog: &'a dyn CatalogSource) -> Self {
        Self {
            catalog,
            components: Vec::new(),
            reagents: Vec::new(),
            batch_matrix: None,
        }
    }

    pub fn components(&self) -> &[SelectedComponent] {
        &self.components
    }

    pub fn reagents(&self) -> &[SelectedReagent] {
        &self.reagents
    }

    /// The batch matrix assembled by the last successful solve, one row per
    /// reagent.
    pub fn batch_matrix(&self) -> Option<&DMatrix<Real>> {
        self.batch_matrix.as_ref()
    }

    /// Add a component with a mole count, or update the count if it is
    /// already selected.
    pub fn select_component(&mut self, id: ComponentId, moles: Real) -> BatchResult<()> {
        ensure_finite(moles, "component moles")?;
        if let Some(sel) = self.components.iter_mut().find(|c| c.record.id == id) {
            sel.moles = moles;
            return Ok(());
        }
        let record = self.catalog.component(id)?;
        self.components.push(SelectedComponent { record, moles });
        Ok(())
    }

    /// Update the mole count of an already selected component.
    pub fn set_moles(&mut self, id: ComponentId, moles: Real) -> BatchResult<()> {
        ensure_finite(moles, "component moles")?;
        let sel = self
            .components
            .iter_mut()
            .find(|c| c.record.id == id)
            .ok_or_else(|| BatchError::Validation {
                what: format!("Component {id} is not selected"),
            })?;
        sel.moles = moles;
        Ok(())
    }

    /// Remove a component; reports whether it was selected.
    pub fn deselect_component(&mut self, id: ComponentId) -> bool {
        let before = self.components.len();
        self.components.retain(|c| c.record.id != id);
        before != self.components.len()
    }

    /// Add a reagent at its catalog concentration. Selecting an already
    /// selected reagent is a no-op.
    pub fn select_reagent(&mut self, id: ReagentId) -> BatchResult<()> {
        if self.reagents.iter().any(|r| r.record.id == id) {
            return Ok(());
        }
        let record = self.catalog.reagent(id)?;
        fractions::check_concentration(record.label(), record.concentration)?;
        self.reagents.push(SelectedReagent {
            concentration: record.concentration,
            record,
            mass: 0.0,
        });
        Ok(())
    }

    /// Override the working concentration of a selected reagent, e.g. when
    /// the stock bottle differs from the catalog default.
    pub fn set_concentration(&mut self, id: ReagentId, concentration: Real) -> BatchResult<()> {
        let sel = self
            .reagents
            .iter_mut()
            .find(|r| r.record.id == id)
            .ok_or_else(|| BatchError::Validation {
                what: format!("Reagent {id} is not selected"),
            })?;
        fractions::check_concentration(sel.record.label(), concentration)?;
        sel.concentration = concentration;
        Ok(())
    }

    /// Remove a reagent; reports whether it was selected.
    pub fn deselect_reagent(&mut self, id: ReagentId) -> bool {
        let before = self.reagents.len();
        self.reagents.retain(|r| r.record.id != id);
        before != self.reagents.len()
    }

    /// Clear all selections and solver state.
    pub fn reset(&mut self) {
        self.components.clear();
        self.reagents.clear();
        self.batch_matrix = None;
    }

    /// Solve for the reagent masses that deliver the selected composition.
    ///
    /// On success the masses are stored on the selected reagents, with the
    /// purity correction applied for plain reactants. A failed solve leaves
    /// the previously stored masses untouched.
    pub fn solve(&mut self) -> BatchResult<()> {
        self.check_selection_counts()?;
        let snapshot = assemble::link_snapshot(self.catalog, &self.reagents)?;
        assemble::check_coverage(&self.components, &snapshot)?;
        let water = self.water_molar_weight()?;
        let a = assemble::target_mass_vector(&self.components);
        let b = assemble::batch_matrix(&self.reagents, &snapshot, &self.components, water)?;
        let x = solve::solve_masses(&b, &a)?;
        tracing::debug!(
            components = self.components.len(),
            reagents = self.reagents.len(),
            "batch solved"
        );
        for (sel, mass) in self.reagents.iter_mut().zip(x.iter()) {
            sel.mass = match sel.record.kind {
                ReagentKind::Reactant => mass / sel.concentration,
                _ => *mass,
            };
        }
        self.batch_matrix = Some(b);
        Ok(())
    }

    /// Inverse mode: from the stored reagent masses, recover the mole count
    /// of every selected component.
    ///
    /// Unlike [`BatchSession::solve`] this only multiplies through the batch
    /// matrix, so it also works when reagent and component counts differ.
    pub fn solve_moles(&mut self) -> BatchResult<()> {
        if self.components.is_empty() {
            return Err(BatchError::Validation {
                what: "No components selected".to_string(),
            });
        }
        if self.reagents.is_empty() {
            return Err(BatchError::Validation {
                what: "No reagents selected".to_string(),
            });
        }
        let snapshot = assemble::link_snapshot(self.catalog, &self.reagents)?;
        assemble::check_coverage(&self.components, &snapshot)?;
        let water = self.water_molar_weight()?;
        let b = assemble::batch_matrix(&self.reagents, &snapshot, &self.components, water)?;
        let x = DVector::from_iterator(
            self.reagents.len(),
            self.reagents.iter().map(|r| match r.record.kind {
                ReagentKind::Reactant => r.mass * r.concentration,
                _ => r.mass,
            }),
        );
        let a = b.transpose() * &x;
        tracing::debug!(reagents = self.reagents.len(), "composition recovered");
        for (sel, grams) in self.components.iter_mut().zip(a.iter()) {
            sel.moles = grams / sel.record.molar_weight;
        }
        self.batch_matrix = Some(b);
        Ok(())
    }

    /// Solved masses in reagent selection order.
    pub fn masses(&self) -> Vec<Real> {
        self.reagents.iter().map(|r| r.mass).collect()
    }

    /// Divide every reagent mass by `factor`.
    pub fn rescale_all(&mut self, factor: Real) -> BatchResult<()> {
        let scaled = rescale::rescale_all(&self.masses(), factor)?;
        self.commit_masses(&scaled)
    }

    /// Rescale so the reagents at `selected` together weigh `target` grams.
    pub fn rescale_to_sample(&mut self, selected: &[usize], target: Real) -> BatchResult<()> {
        let scaled = rescale::rescale_to_sample(&self.masses(), selected, target)?;
        self.commit_masses(&scaled)
    }

    /// Rescale the composition so one component lands on `target` moles.
    pub fn rescale_to_component(&mut self, id: ComponentId, target: Real) -> BatchResult<()> {
        let index = self
            .components
            .iter()
            .position(|c| c.record.id == id)
            .ok_or_else(|| BatchError::Validation {
                what: format!("Component {id} is not selected"),
            })?;
        let moles: Vec<Real> = self.components.iter().map(|c| c.moles).collect();
        let scaled = rescale::rescale_to_index(&moles, index, target)?;
        for (sel, m) in self.components.iter_mut().zip(scaled) {
            sel.moles = m;
        }
        Ok(())
    }

    fn check_selection_counts(&self) -> BatchResult<()> {
        if self.components.is_empty() {
            return Err(BatchError::Validation {
                what: "No components selected".to_string(),
            });
        }
        if self.reagents.is_empty() {
            return Err(BatchError::Validation {
                what: "No reagents selected".to_string(),
            });
        }
        if self.components.len() != self.reagents.len() {
            return Err(BatchError::Validation {
                what: format!(
                    "Component and reagent counts must match: {} components vs {} reagents",
                    self.components.len(),
                    self.reagents.len()
                ),
            });
        }
        Ok(())
    }

    /// Solvent molar weight, looked up only when a solution-kind reagent is
    /// selected, so catalogs without water still solve dry batches.
    fn water_molar_weight(&self) -> BatchResult<Option<Real>> {
        if self
            .reagents
            .iter()
            .any(|r| r.record.kind == ReagentKind::Solution)
        {
            Ok(Some(self.catalog.molar_weight(WATER_FORMULA)?))
        } else {
            Ok(None)
        }
    }

    /// Write a rescaled mass vector back onto the selected reagents.
    ///
    /// The rescaling functions in [`crate::rescale`] are pure, so a caller
    /// can preview a rescale and only commit the variant it keeps.
    pub fn commit_masses(&mut self, masses: &[Real]) -> BatchResult<()> {
        if masses.len() != self.reagents.len() {
            return Err(BatchError::Validation {
                what: format!(
                    "Expected {} masses, got {}",
                    self.reagents.len(),
                    masses.len()
                ),
            });
        }
        for (sel, mass) in self.reagents.iter_mut().zip(masses) {
            sel.mass = *mass;
        }
        Ok(())
    }
}
