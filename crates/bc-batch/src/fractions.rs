//! Weight-fraction resolution.
//!
//! For each reagent, the resolver answers one question: what fraction of a
//! gram of this reagent ends up as each linked component? The answer depends
//! only on the reagent's kind, its concentration, and its stoichiometric
//! links, so the whole module is pure computation.

use crate::error::{BatchError, BatchResult};
use bc_catalog::{ComponentRecord, ReagentKind, StoichiometricLink, WATER_FORMULA};
use bc_core::{ComponentId, Real};

/// Concentrations within this window of 1.0 are treated as pure solute.
const PURE_SOLUTE_WINDOW: Real = 1e-4;

/// A stoichiometric link joined with the component record it points at.
#[derive(Debug, Clone)]
pub struct LinkedComponent {
    pub link: StoichiometricLink,
    pub component: ComponentRecord,
}

impl LinkedComponent {
    fn is_water(&self) -> bool {
        self.component.formula == WATER_FORMULA
    }
}

/// The reagent fields the resolver dispatches on.
#[derive(Debug, Clone, Copy)]
pub struct ReagentChemistry<'a> {
    pub label: &'a str,
    pub kind: ReagentKind,
    /// Molar weight [g/mol] of the reagent itself (the solute, for solutions).
    pub molar_weight: Real,
    pub concentration: Real,
}

/// Concentrations are fractions for every kind: purity for reactants, solute
/// weight fraction for solutions, active-component weight fraction for
/// mixtures.
pub(crate) fn check_concentration(label: &str, concentration: Real) -> BatchResult<()> {
    if !concentration.is_finite() || concentration <= 0.0 || concentration > 1.0 {
        return Err(BatchError::Validation {
            what: format!(
                "Reagent '{label}': concentration must be in (0, 1], got {concentration}"
            ),
        });
    }
    Ok(())
}

/// Decompose a reagent's mass across its linked components.
///
/// Returns (component id, weight fraction) pairs in link order. For `mixture`
/// and `solution` kinds the fractions account for the full mass including the
/// water term and sum to 1; for `reactant` they span the linked components
/// only. `water_molar_weight` is required only by the `solution` kind.
pub fn weight_fractions(
    reagent: ReagentChemistry<'_>,
    links: &[LinkedComponent],
    water_molar_weight: Option<Real>,
) -> BatchResult<Vec<(ComponentId, Real)>> {
    check_concentration(reagent.label, reagent.concentration)?;
    if links.is_empty() {
        return Err(BatchError::Unsupported {
            what: format!("Reagent '{}' has no stoichiometric links", reagent.label),
        });
    }

    match reagent.kind {
        ReagentKind::Mixture => mixture_fractions(reagent, links),
        ReagentKind::Solution => solution_fractions(reagent, links, water_molar_weight),
        ReagentKind::Reactant => Ok(reactant_fractions(links)),
    }
}

/// The declared concentration is the active component's weight fraction;
/// every water link carries the complement.
fn mixture_fractions(
    reagent: ReagentChemistry<'_>,
    links: &[LinkedComponent],
) -> BatchResult<Vec<(ComponentId, Real)>> {
    let nonwater = links.iter().filter(|l| !l.is_water()).count();
    if nonwater > 1 {
        return Err(BatchError::Unsupported {
            what: format!(
                "Reagent '{}': a mixture splits one active component against water, found {} non-water links",
                reagent.label, nonwater
            ),
        });
    }
    Ok(links
        .iter()
        .map(|l| {
            let wf = if l.is_water() {
                1.0 - reagent.concentration
            } else {
                reagent.concentration
            };
            (l.link.component, wf)
        })
        .collect())
}

/// One solute dissolved in water. Mole counts of solute and solvent are
/// recovered from the declared solute weight fraction, then each link's raw
/// mass contribution (reaction water plus dissolution water for the water
/// link) is normalized by the total.
fn solution_fractions(
    reagent: ReagentChemistry<'_>,
    links: &[LinkedComponent],
    water_molar_weight: Option<Real>,
) -> BatchResult<Vec<(ComponentId, Real)>> {
    if links.len() > 2 {
        return Err(BatchError::Unsupported {
            what: format!(
                "Reagent '{}': a solution handles one solute in water, found {} links",
                reagent.label,
                links.len()
            ),
        });
    }
    let m_solv = water_molar_weight.ok_or_else(|| BatchError::Validation {
        what: format!(
            "Reagent '{}': no solvent molar weight available for the solution",
            reagent.label
        ),
    })?;
    let m_solu = reagent.molar_weight;
    let c = reagent.concentration;

    let (n_solu, n_solv) = if (c - 1.0).abs() > PURE_SOLUTE_WINDOW {
        (
            m_solu * m_solv / (m_solv + (1.0 - c) * m_solu / c) / m_solu,
            m_solu * m_solv / (m_solu + c * m_solv / (1.0 - c)) / m_solv,
        )
    } else {
        (1.0, 0.0)
    };

    let raw: Vec<Real> = links
        .iter()
        .map(|l| {
            if l.is_water() {
                (l.link.coefficient * n_solu + n_solv) * l.component.molar_weight
            } else {
                l.link.coefficient * n_solu * l.component.molar_weight
            }
        })
        .collect();
    let total: Real = raw.iter().sum();

    Ok(links
        .iter()
        .zip(raw)
        .map(|(l, mass)| (l.link.component, mass / total))
        .collect())
}

/// Weighed out as-is: a single link takes the whole mass, several links split
/// it by coefficient × molar weight.
fn reactant_fractions(links: &[LinkedComponent]) -> Vec<(ComponentId, Real)> {
    if links.len() == 1 {
        return vec![(links[0].link.component, 1.0)];
    }
    let total: Real = links
        .iter()
        .map(|l| l.link.coefficient * l.component.molar_weight)
        .sum();
    links
        .iter()
        .map(|l| {
            (
                l.link.component,
                l.link.coefficient * l.component.molar_weight / total,
            )
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Dissolving a solute in water must reproduce the declared solute
        // weight fraction: with the solute linked to itself (coefficient 1)
        // and a bare water link (coefficient 0), the emitted fractions are
        // exactly (c, 1 - c).
        #[test]
        fn dissolution_reproduces_the_declared_fraction(
            m_solu in 20.0_f64..500.0,
            c in 0.01_f64..0.99,
        ) {
            let solute = super::tests::component(0, "X", m_solu);
            let water = super::tests::component(1, "H2O", 18.015);
            let links = vec![
                super::tests::linked(0, solute, 1.0),
                super::tests::linked(0, water, 0.0),
            ];
            let reagent = ReagentChemistry {
                label: "solution",
                kind: ReagentKind::Solution,
                molar_weight: m_solu,
                concentration: c,
            };
            let wfs = weight_fractions(reagent, &links, Some(18.015)).unwrap();
            prop_assert!((wfs[0].1 - c).abs() < 1e-9);
            prop_assert!((wfs[1].1 - (1.0 - c)).abs() < 1e-9);
        }

        // Mixture and solution kinds account for the full mass: fractions sum
        // to 1 for any valid concentration.
        #[test]
        fn full_accounting_kinds_sum_to_one(c in 0.05_f64..0.95) {
            let active = super::tests::component(0, "SiO2", 60.08);
            let water = super::tests::component(1, "H2O", 18.015);
            let links = vec![
                super::tests::linked(0, active, 1.0),
                super::tests::linked(0, water, 1.0),
            ];
            for kind in [ReagentKind::Mixture, ReagentKind::Solution] {
                let reagent = ReagentChemistry {
                    label: "blend",
                    kind,
                    molar_weight: 60.08,
                    concentration: c,
                };
                let total: f64 = weight_fractions(reagent, &links, Some(18.015))
                    .unwrap()
                    .iter()
                    .map(|(_, wf)| wf)
                    .sum();
                prop_assert!((total - 1.0).abs() < 1e-9);
            }
        }
    }
}
