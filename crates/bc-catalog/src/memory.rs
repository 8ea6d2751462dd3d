//! In-memory catalog backed by plain vectors.
//!
//! Ids are assigned from insertion order, so lookups by id are direct
//! indexing. This is the fixture implementation for tests and the backing
//! store for the builtin catalog; an external database adapter would
//! implement [`CatalogSource`] the same way.

use crate::error::{CatalogError, CatalogResult};
use crate::records::{
    Category, ComponentRecord, ReactionRecord, ReagentKind, ReagentRecord, StoichiometricLink,
};
use crate::source::CatalogSource;
use bc_core::{ComponentId, Id, ReactionId, Real, ReagentId};

/// Field set for inserting a component (the id is assigned by the catalog).
#[derive(Debug, Clone)]
pub struct NewComponent<'a> {
    pub name: &'a str,
    pub formula: &'a str,
    pub molar_weight: Real,
    pub short_name: Option<&'a str>,
    pub category: Category,
}

impl<'a> NewComponent<'a> {
    pub fn new(name: &'a str, formula: &'a str, molar_weight: Real, category: Category) -> Self {
        Self {
            name,
            formula,
            molar_weight,
            short_name: None,
            category,
        }
    }

    pub fn short_name(mut self, short_name: &'a str) -> Self {
        self.short_name = Some(short_name);
        self
    }
}

/// Field set for inserting a reagent (the id is assigned by the catalog).
#[derive(Debug, Clone)]
pub struct NewReagent<'a> {
    pub name: &'a str,
    pub formula: &'a str,
    pub molar_weight: Real,
    pub short_name: Option<&'a str>,
    pub kind: ReagentKind,
    pub concentration: Real,
    pub cas: Option<&'a str>,
    pub density: Option<Real>,
}

impl<'a> NewReagent<'a> {
    pub fn new(
        name: &'a str,
        formula: &'a str,
        molar_weight: Real,
        kind: ReagentKind,
        concentration: Real,
    ) -> Self {
        Self {
            name,
            formula,
            molar_weight,
            short_name: None,
            kind,
            concentration,
            cas: None,
            density: None,
        }
    }

    pub fn short_name(mut self, short_name: &'a str) -> Self {
        self.short_name = Some(short_name);
        self
    }

    pub fn cas(mut self, cas: &'a str) -> Self {
        self.cas = Some(cas);
        self
    }

    pub fn density(mut self, density: Real) -> Self {
        self.density = Some(density);
        self
    }
}

/// Vec-backed [`CatalogSource`] implementation with an insertion API.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    components: Vec<ComponentRecord>,
    reagents: Vec<ReagentRecord>,
    reactions: Vec<ReactionRecord>,
    links: Vec<StoichiometricLink>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_component(&mut self, new: NewComponent<'_>) -> ComponentId {
        let id = Id::from_index(self.components.len() as u32);
        self.components.push(ComponentRecord {
            id,
            name: new.name.to_string(),
            formula: new.formula.to_string(),
            molar_weight: new.molar_weight,
            short_name: new.short_name.map(str::to_string),
            category: new.category,
        });
        id
    }

    pub fn add_reagent(&mut self, new: NewReagent<'_>) -> ReagentId {
        let id = Id::from_index(self.reagents.len() as u32);
        self.reagents.push(ReagentRecord {
            id,
            name: new.name.to_string(),
            formula: new.formula.to_string(),
            molar_weight: new.molar_weight,
            short_name: new.short_name.map(str::to_string),
            kind: new.kind,
            concentration: new.concentration,
            cas: new.cas.map(str::to_string),
            density: new.density,
        });
        id
    }

    pub fn add_reaction(&mut self, equation: &str) -> ReactionId {
        let id = Id::from_index(self.reactions.len() as u32);
        self.reactions.push(ReactionRecord {
            id,
            equation: equation.to_string(),
        });
        id
    }

    /// Declare that one mole of `reagent` delivers `coefficient` moles of
    /// `component`. Rejects unknown ids, duplicate (reagent, component)
    /// pairs, and coefficients that are not finite and positive.
    pub fn link(
        &mut self,
        reagent: ReagentId,
        component: ComponentId,
        coefficient: Real,
    ) -> CatalogResult<()> {
        self.insert_link(reagent, component, coefficient, None)
    }

    /// Like [`MemoryCatalog::link`], attributing the link to a named reaction.
    pub fn link_via(
        &mut self,
        reagent: ReagentId,
        component: ComponentId,
        coefficient: Real,
        reaction: ReactionId,
    ) -> CatalogResult<()> {
        self.insert_link(reagent, component, coefficient, Some(reaction))
    }

    fn insert_link(
        &mut self,
        reagent: ReagentId,
        component: ComponentId,
        coefficient: Real,
        reaction: Option<ReactionId>,
    ) -> CatalogResult<()> {
        if reagent.index() as usize >= self.reagents.len() {
            return Err(CatalogError::UnknownReagent(reagent));
        }
        if component.index() as usize >= self.components.len() {
            return Err(CatalogError::UnknownComponent(component));
        }
        if let Some(reaction) = reaction {
            if reaction.index() as usize >= self.reactions.len() {
                return Err(CatalogError::UnknownReaction(reaction));
            }
        }
        if !coefficient.is_finite() || coefficient <= 0.0 {
            return Err(CatalogError::InvalidCoefficient {
                reagent,
                component,
                coefficient,
            });
        }
        let duplicate = self
            .links
            .iter()
            .any(|l| l.reagent == reagent && l.component == component);
        if duplicate {
            return Err(CatalogError::DuplicateLink { reagent, component });
        }
        self.links.push(StoichiometricLink {
            reagent,
            component,
            coefficient,
            reaction,
        });
        Ok(())
    }

    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    pub fn reagents(&self) -> &[ReagentRecord] {
        &self.reagents
    }

    pub fn reactions(&self) -> &[ReactionRecord] {
        &self.reactions
    }

    pub fn links(&self) -> &[StoichiometricLink] {
        &self.links
    }

    /// First component matching a free-text query; an exact formula match
    /// wins over a substring match.
    pub fn find_component(&self, query: &str) -> Option<&ComponentRecord> {
        self.components
            .iter()
            .find(|c| c.formula.eq_ignore_ascii_case(query.trim()))
            .or_else(|| self.components.iter().find(|c| c.matches_query(query)))
    }

    /// First reagent matching a free-text query; an exact formula or name
    /// match wins over a substring match.
    pub fn find_reagent(&self, query: &str) -> Option<&ReagentRecord> {
        let q = query.trim();
        self.reagents
            .iter()
            .find(|r| r.formula.eq_ignore_ascii_case(q) || r.name.eq_ignore_ascii_case(q))
            .or_else(|| self.reagents.iter().find(|r| r.matches_query(query)))
    }

    pub fn reaction(&self, id: ReactionId) -> CatalogResult<ReactionRecord> {
        self.reactions
            .get(id.index() as usize)
            .cloned()
            .ok_or(CatalogError::UnknownReaction(id))
    }
}

impl CatalogSource for MemoryCatalog {
    fn components_by_category(&self, category: Category) -> CatalogResult<Vec<ComponentRecord>> {
        Ok(self
            .components
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect())
    }

    fn reagents_sourcing(&self, components: &[ComponentId]) -> CatalogResult<Vec<ReagentRecord>> {
        let mut ids: Vec<ReagentId> = self
            .links
            .iter()
            .filter(|l| components.contains(&l.component))
            .map(|l| l.reagent)
            .collect();
        ids.sort();
        ids.dedup();
        ids.into_iter().map(|id| self.reagent(id)).collect()
    }

    fn links_for_reagent(&self, reagent: ReagentId) -> CatalogResult<Vec<StoichiometricLink>> {
        if reagent.index() as usize >= self.reagents.len() {
            return Err(CatalogError::UnknownReagent(reagent));
        }
        Ok(self
            .links
            .iter()
            .filter(|l| l.reagent == reagent)
            .copied()
            .collect())
    }

    fn molar_weight(&self, formula: &str) -> CatalogResult<Real> {
        let formula = formula.trim();
        self.components
            .iter()
            .find(|c| c.formula.eq_ignore_ascii_case(formula))
            .map(|c| c.molar_weight)
            .or_else(|| {
                self.reagents
                    .iter()
                    .find(|r| r.formula.eq_ignore_ascii_case(formula))
                    .map(|r| r.molar_weight)
            })
            .ok_or_else(|| CatalogError::UnknownFormula {
                formula: formula.to_string(),
            })
    }

    fn component(&self, id: ComponentId) -> CatalogResult<ComponentRecord> {
        self.components
            .get(id.index() as usize)
            .cloned()
            .ok_or(CatalogError::UnknownComponent(id))
    }

    fn reagent(&self, id: ReagentId) -> CatalogResult<ReagentRecord> {
        self.reagents
            .get(id.index() as usize)
            .cloned()
            .ok_or(CatalogError::UnknownReagent(id))
    }
}
