//! Catalog record types.
//!
//! Records are plain values linked by ids, not by embedded references. The
//! catalog owns them; the calculator only ever reads copies.

use bc_core::{ComponentId, ReactionId, ReagentId, Real};
use serde::{Deserialize, Serialize};

/// Formula string the calculator treats as the solvent/complement phase.
pub const WATER_FORMULA: &str = "H2O";

/// Category of a target component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Framework oxide (SiO₂, Al₂O₃, Na₂O, ...)
    Zeolite,
    /// Organic structure-directing agent, counted in oxide form
    Template,
    /// Zeolite growth modifier
    Zgm,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Zeolite, Category::Template, Category::Zgm];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Zeolite => "zeolite",
            Category::Template => "template",
            Category::Zgm => "zgm",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zeolite" => Ok(Category::Zeolite),
            "template" => Ok(Category::Template),
            "zgm" => Ok(Category::Zgm),
            _ => Err("unknown component category"),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// How a reagent's mass decomposes into the components it is linked to.
///
/// The tag also fixes the meaning of [`ReagentRecord::concentration`]:
/// purity fraction for `Reactant`, solute weight fraction for `Solution`,
/// active-component weight fraction for `Mixture`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReagentKind {
    /// Weighed out as-is; mass splits across links by coefficient × molar weight.
    Reactant,
    /// One solute dissolved in water at a declared weight fraction.
    Solution,
    /// Physical blend of one active component plus water.
    Mixture,
}

impl ReagentKind {
    pub const ALL: [ReagentKind; 3] = [
        ReagentKind::Reactant,
        ReagentKind::Solution,
        ReagentKind::Mixture,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReagentKind::Reactant => "reactant",
            ReagentKind::Solution => "solution",
            ReagentKind::Mixture => "mixture",
        }
    }
}

impl std::str::FromStr for ReagentKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reactant" => Ok(ReagentKind::Reactant),
            "solution" => Ok(ReagentKind::Solution),
            "mixture" => Ok(ReagentKind::Mixture),
            _ => Err("unknown reagent kind"),
        }
    }
}

impl std::fmt::Display for ReagentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A target material constituent with a known molar weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: ComponentId,
    pub name: String,
    pub formula: String,
    /// Molar weight [g/mol]
    pub molar_weight: Real,
    pub short_name: Option<String>,
    pub category: Category,
}

impl ComponentRecord {
    /// Short label for lists and tables: short name if present, else formula.
    pub fn label(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.formula)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
            || self
                .short_name
                .as_deref()
                .is_some_and(|s| s.to_ascii_lowercase().contains(&query))
    }
}

/// A sourceable stock chemical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReagentRecord {
    pub id: ReagentId,
    pub name: String,
    pub formula: String,
    /// Molar weight [g/mol]
    pub molar_weight: Real,
    pub short_name: Option<String>,
    pub kind: ReagentKind,
    /// Default concentration; see [`ReagentKind`] for its meaning per kind.
    pub concentration: Real,
    pub cas: Option<String>,
    /// Density [g/cm³], when known; enables volume display.
    pub density: Option<Real>,
}

impl ReagentRecord {
    /// Short label for lists and tables: short name if present, else formula.
    pub fn label(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.formula)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
            || self
                .short_name
                .as_deref()
                .is_some_and(|s| s.to_ascii_lowercase().contains(&query))
            || self
                .cas
                .as_deref()
                .is_some_and(|s| s.to_ascii_lowercase().contains(&query))
    }
}

/// Moles of a component delivered per mole of a reagent, under an optional
/// named reaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoichiometricLink {
    pub reagent: ReagentId,
    pub component: ComponentId,
    pub coefficient: Real,
    pub reaction: Option<ReactionId>,
}

/// A named decomposition reaction behind one or more links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub id: ReactionId,
    pub equation: String,
}
