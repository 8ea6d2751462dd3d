//! Presentation of a solved batch: aligned text tables for the console and a
//! serializable report for downstream tooling.

use crate::session::{BatchSession, SelectedComponent, SelectedReagent};
use bc_catalog::ReagentKind;
use bc_core::Real;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Label columns never shrink below this, so small selections still line up.
const MIN_LABEL_WIDTH: usize = 15;

fn label_width<'s>(labels: impl Iterator<Item = &'s str>) -> usize {
    labels.map(str::len).max().unwrap_or(0).max(MIN_LABEL_WIDTH)
}

/// Target composition as an aligned text table.
pub fn composition_table(components: &[SelectedComponent]) -> String {
    let width = label_width(components.iter().map(|c| c.record.label()));
    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$} | {:>10} | {:>10}\n",
        "Component", "Moles", "Mass [g]"
    ));
    out.push_str(&format!("{:-<1$}\n", "", width + 26));
    for c in components {
        out.push_str(&format!(
            "{:<width$} | {:>10.4} | {:>10.4}\n",
            c.record.label(),
            c.moles,
            c.mass()
        ));
    }
    out
}

/// Reagent amounts as an aligned text table. Volume shows `-` when the
/// catalog has no density for a reagent.
pub fn batch_table(reagents: &[SelectedReagent]) -> String {
    let width = label_width(reagents.iter().map(|r| r.record.label()));
    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$} | {:>8} | {:>6} | {:>10} | {:>10}\n",
        "Reagent", "Kind", "Conc", "Mass [g]", "Vol [cm3]"
    ));
    out.push_str(&format!("{:-<1$}\n", "", width + 46));
    for r in reagents {
        let volume = r
            .volume()
            .map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
        out.push_str(&format!(
            "{:<width$} | {:>8} | {:>6.3} | {:>10.4} | {:>10}\n",
            r.record.label(),
            r.record.kind,
            r.concentration,
            r.mass,
            volume
        ));
    }
    out
}

/// The batch matrix with reagent rows and component columns.
pub fn matrix_table(
    b: &DMatrix<Real>,
    reagents: &[SelectedReagent],
    components: &[SelectedComponent],
) -> String {
    let width = label_width(reagents.iter().map(|r| r.record.label()));
    let cw = components
        .iter()
        .map(|c| c.record.label().len())
        .max()
        .unwrap_or(0)
        .max(10);
    let mut out = String::new();
    out.push_str(&format!("{:<width$}", "Reagent"));
    for c in components {
        out.push_str(&format!(" | {:>cw$}", c.record.label()));
    }
    out.push('\n');
    for (row, r) in reagents.iter().enumerate() {
        out.push_str(&format!("{:<width$}", r.record.label()));
        for col in 0..components.len() {
            out.push_str(&format!(" | {:>cw$.4}", b[(row, col)]));
        }
        out.push('\n');
    }
    out
}

/// Serializable snapshot of a session after a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub components: Vec<ComponentLine>,
    pub reagents: Vec<ReagentLine>,
    /// Batch matrix rows (one per reagent), absent before the first solve.
    pub matrix: Option<Vec<Vec<Real>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentLine {
    pub label: String,
    pub formula: String,
    pub moles: Real,
    pub mass: Real,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReagentLine {
    pub label: String,
    pub name: String,
    pub kind: ReagentKind,
    pub concentration: Real,
    pub mass: Real,
    pub volume: Option<Real>,
}

impl BatchReport {
    /// Snapshot the session's selections and solved masses.
    pub fn from_session(session: &BatchSession<'_>) -> Self {
        Self {
            components: session
                .components()
                .iter()
                .map(|c| ComponentLine {
                    label: c.record.label().to_string(),
                    formula: c.record.formula.clone(),
                    moles: c.moles,
                    mass: c.mass(),
                })
                .collect(),
            reagents: session
                .reagents()
                .iter()
                .map(|r| ReagentLine {
                    label: r.record.label().to_string(),
                    name: r.record.name.clone(),
                    kind: r.record.kind,
                    concentration: r.concentration,
                    mass: r.mass,
                    volume: r.volume(),
                })
                .collect(),
            matrix: session.batch_matrix().map(|b| {
                b.row_iter()
                    .map(|row| row.iter().copied().collect())
                    .collect()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_catalog::builtin_catalog;

    fn solved_session(cat: &bc_catalog::MemoryCatalog) -> BatchSession<'_> {
        let silica = cat.find_component("SiO2").unwrap().id;
        let fumed = cat.find_reagent("Fumed silica").unwrap().id;
        let mut session = BatchSession::new(cat);
        session.select_component(silica, 1.0).unwrap();
        session.select_reagent(fumed).unwrap();
        session.solve().unwrap();
        session
    }

    #[test]
    fn composition_table_lists_moles_and_masses() {
        let cat = builtin_catalog();
        let session = solved_session(&cat);
        let table = composition_table(session.components());
        assert!(table.contains("Component"));
        assert!(table.contains("SiO2"));
        assert!(table.contains("1.0000"));
        assert!(table.contains("60.0800"));
        // header, separator, one row
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn batch_table_shows_kind_mass_and_volume() {
        let cat = builtin_catalog();
        let session = solved_session(&cat);
        let table = batch_table(session.reagents());
        assert!(table.contains("fumed silica"));
        assert!(table.contains("reactant"));
        assert!(table.contains("60.0800"));
        // 60.08 g at 2.20 g/cm3
        assert!(table.contains("27.3091"));
    }

    #[test]
    fn matrix_table_prints_the_weight_fractions() {
        let cat = builtin_catalog();
        let session = solved_session(&cat);
        let table = matrix_table(
            session.batch_matrix().unwrap(),
            session.reagents(),
            session.components(),
        );
        assert!(table.contains("Reagent"));
        assert!(table.contains("SiO2"));
        assert!(table.contains("1.0000"));
    }

    #[test]
    fn report_serializes_with_lowercase_kinds() {
        let cat = builtin_catalog();
        let session = solved_session(&cat);
        let report = BatchReport::from_session(&session);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["reagents"][0]["kind"], "reactant");
        assert_eq!(value["components"][0]["formula"], "SiO2");
        assert_eq!(value["matrix"][0][0], 1.0);
        let mass = value["reagents"][0]["mass"].as_f64().unwrap();
        assert!((mass - 60.08).abs() < 1e-9);

        let back: BatchReport = serde_json::from_value(value).unwrap();
        assert_eq!(back.reagents[0].label, "fumed silica");
    }
}
