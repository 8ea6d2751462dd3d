//! End-to-end batch workflows against the builtin catalog.

use bc_batch::parse::{self, DEFAULT_DELIMITER};
use bc_batch::report::{batch_table, composition_table};
use bc_batch::{BatchReport, BatchSession};
use bc_catalog::{builtin_catalog, CatalogSource, MemoryCatalog, ReagentKind};
use nalgebra::DVector;

/// Undo the purity correction so the stored masses can be checked against
/// the assembled system directly.
fn raw_masses(session: &BatchSession<'_>) -> DVector<f64> {
    DVector::from_iterator(
        session.reagents().len(),
        session.reagents().iter().map(|r| match r.record.kind {
            ReagentKind::Reactant => r.mass * r.concentration,
            _ => r.mass,
        }),
    )
}

fn assert_balanced(session: &BatchSession<'_>) {
    let b = session.batch_matrix().expect("session was solved");
    let a = DVector::from_iterator(
        session.components().len(),
        session.components().iter().map(|c| c.mass()),
    );
    let residual = b.transpose() * raw_masses(session) - a;
    assert!(residual.amax() < 1e-9, "residual {residual}");
}

fn select_composition(
    session: &mut BatchSession<'_>,
    catalog: &MemoryCatalog,
    composition: &str,
) -> usize {
    let mut selected = 0;
    for (formula, moles) in parse::parse_composition(composition, DEFAULT_DELIMITER) {
        if let Some(component) = catalog.find_component(&formula) {
            session.select_component(component.id, moles).unwrap();
            selected += 1;
        }
    }
    selected
}

fn select_reagents(session: &mut BatchSession<'_>, catalog: &MemoryCatalog, queries: &[&str]) {
    for query in queries {
        let reagent = catalog
            .find_reagent(query)
            .unwrap_or_else(|| panic!("no reagent matches '{query}'"));
        session.select_reagent(reagent.id).unwrap();
    }
}

#[test]
fn zeolite_gel_batch_solves_end_to_end() {
    let catalog = builtin_catalog();
    let mut session = BatchSession::new(&catalog);

    let n = select_composition(
        &mut session,
        &catalog,
        "1SiO2:0.02Al2O3:0.1Na2O:40H2O",
    );
    assert_eq!(n, 4);
    select_reagents(
        &mut session,
        &catalog,
        &["Fumed silica", "Sodium aluminate", "NaOH 50%", "Distilled water"],
    );

    session.solve().unwrap();
    assert_balanced(&session);

    let masses = session.masses();
    assert!(masses.iter().all(|m| *m > 0.0), "masses: {masses:?}");
    // 0.02 mol Al2O3 requires 0.04 mol NaAlO2
    assert!((masses[1] - 0.04 * 81.97).abs() < 1e-6, "aluminate: {}", masses[1]);

    let report = BatchReport::from_session(&session);
    assert_eq!(report.components.len(), 4);
    assert_eq!(report.reagents[0].label, "fumed silica");
    assert!(composition_table(session.components()).contains("Al2O3"));
    assert!(batch_table(session.reagents()).contains("Sodium aluminate"));
}

#[test]
fn mixture_reagents_split_by_concentration() {
    let catalog = builtin_catalog();
    let mut session = BatchSession::new(&catalog);

    select_composition(&mut session, &catalog, "1SiO2:40H2O");
    select_reagents(&mut session, &catalog, &["LUDOX", "Distilled water"]);

    session.solve().unwrap();
    assert_balanced(&session);

    // 40 wt% colloidal silica: 60.08 g SiO2 needs 150.2 g LUDOX, whose water
    // content then offsets the distilled water
    let masses = session.masses();
    assert!((masses[0] - 150.2).abs() < 1e-9);
    assert!((masses[1] - (720.6 - 0.60 * 150.2)).abs() < 1e-9);
}

#[test]
fn sample_rescale_preserves_the_recipe() {
    let catalog = builtin_catalog();
    let mut session = BatchSession::new(&catalog);

    select_composition(&mut session, &catalog, "1SiO2:40H2O");
    select_reagents(&mut session, &catalog, &["LUDOX", "Distilled water"]);
    session.solve().unwrap();

    let before = session.masses();
    session.rescale_to_sample(&[0, 1], 100.0).unwrap();
    let after = session.masses();

    let total: f64 = after.iter().sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!((after[0] / after[1] - before[0] / before[1]).abs() < 1e-9);
}

#[test]
fn template_synthesis_balances_with_a_solution() {
    let catalog = builtin_catalog();
    let mut session = BatchSession::new(&catalog);

    let n = select_composition(&mut session, &catalog, "0.04(TPA)2O:25H2O");
    assert_eq!(n, 2);
    select_reagents(&mut session, &catalog, &["TPAOH 40%", "Distilled water"]);

    session.solve().unwrap();
    assert_balanced(&session);
    assert!(session.masses().iter().all(|m| *m > 0.0));
}

#[test]
fn unknown_formulas_fall_out_of_the_selection() {
    let catalog = builtin_catalog();
    let mut session = BatchSession::new(&catalog);

    let n = select_composition(&mut session, &catalog, "1SiO2:3XyZ9:40H2O");
    assert_eq!(n, 2);
    assert_eq!(session.components().len(), 2);
}

#[test]
fn composition_round_trips_through_the_formatter() {
    let pairs = parse::parse_composition("1SiO2:0.02Al2O3:0.1Na2O:40H2O", DEFAULT_DELIMITER);
    let text = parse::format_composition(&pairs, DEFAULT_DELIMITER);
    assert_eq!(parse::parse_composition(&text, DEFAULT_DELIMITER), pairs);
}

#[test]
fn sourcing_suggests_reagents_for_a_selection() {
    let catalog = builtin_catalog();
    let silica = catalog.find_component("SiO2").unwrap().id;

    let sourcing = catalog.reagents_sourcing(&[silica]).unwrap();
    let names: Vec<&str> = sourcing.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Fumed silica",
            "Colloidal silica LUDOX HS-40",
            "Sodium silicate nonahydrate"
        ]
    );
}

#[test]
fn composition_rescale_pins_one_component() {
    let catalog = builtin_catalog();
    let mut session = BatchSession::new(&catalog);

    select_composition(&mut session, &catalog, "2SiO2:0.04Al2O3");
    let silica = catalog.find_component("SiO2").unwrap().id;
    session.rescale_to_component(silica, 1.0).unwrap();

    let moles: Vec<f64> = session.components().iter().map(|c| c.moles).collect();
    assert!((moles[0] - 1.0).abs() < 1e-12);
    assert!((moles[1] - 0.02).abs() < 1e-12);
}
