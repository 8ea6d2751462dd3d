//! Builtin zeolite-synthesis catalog.
//!
//! A seeded [`MemoryCatalog`] covering the stock chemicals of common
//! hydrothermal zeolite recipes. Components are counted in oxide form; each
//! reagent's links describe its anhydrous decomposition into those oxides.

use crate::memory::{MemoryCatalog, NewComponent, NewReagent};
use crate::records::{Category, ReagentKind};
use bc_core::Real;

struct SeedComponent {
    name: &'static str,
    formula: &'static str,
    molar_weight: Real,
    short_name: Option<&'static str>,
    category: Category,
}

struct SeedReagent {
    name: &'static str,
    formula: &'static str,
    molar_weight: Real,
    short_name: Option<&'static str>,
    kind: ReagentKind,
    concentration: Real,
    cas: &'static str,
    density: Real,
}

/// Indices refer to positions in the seed tables.
struct SeedLink {
    reagent: usize,
    component: usize,
    coefficient: Real,
    reaction: Option<usize>,
}

const SEED_REACTIONS: [&str; 9] = [
    "2 NaAlO2 = Na2O + Al2O3",
    "2 NaOH = Na2O + H2O",
    "2 KOH = K2O + H2O",
    "2 TPAOH = (TPA)2O + H2O",
    "2 Al(OH)3 = Al2O3 + 3 H2O",
    "2 H3BO3 = B2O3 + 3 H2O",
    "2 H3PO4 = P2O5 + 3 H2O",
    "2 TMAOH(H2O)5 = (TMA)2O + 11 H2O",
    "Na2SiO3(H2O)9 = Na2O + SiO2 + 9 H2O",
];

const SEED_COMPONENTS: [SeedComponent; 10] = [
    SeedComponent {
        name: "Silicon dioxide",
        formula: "SiO2",
        molar_weight: 60.08,
        short_name: None,
        category: Category::Zeolite,
    },
    SeedComponent {
        name: "Aluminium oxide",
        formula: "Al2O3",
        molar_weight: 101.96,
        short_name: None,
        category: Category::Zeolite,
    },
    SeedComponent {
        name: "Sodium oxide",
        formula: "Na2O",
        molar_weight: 61.98,
        short_name: None,
        category: Category::Zeolite,
    },
    SeedComponent {
        name: "Potassium oxide",
        formula: "K2O",
        molar_weight: 94.20,
        short_name: None,
        category: Category::Zeolite,
    },
    SeedComponent {
        name: "Boron oxide",
        formula: "B2O3",
        molar_weight: 69.62,
        short_name: None,
        category: Category::Zeolite,
    },
    SeedComponent {
        name: "Phosphorus pentoxide",
        formula: "P2O5",
        molar_weight: 141.94,
        short_name: None,
        category: Category::Zeolite,
    },
    SeedComponent {
        name: "Water",
        formula: "H2O",
        molar_weight: 18.015,
        short_name: None,
        category: Category::Zeolite,
    },
    SeedComponent {
        name: "Tetrapropylammonium oxide",
        formula: "(TPA)2O",
        molar_weight: 388.73,
        short_name: Some("TPA2O"),
        category: Category::Template,
    },
    SeedComponent {
        name: "Tetramethylammonium oxide",
        formula: "(TMA)2O",
        molar_weight: 164.29,
        short_name: Some("TMA2O"),
        category: Category::Template,
    },
    SeedComponent {
        name: "Glycerol",
        formula: "C3H8O3",
        molar_weight: 92.09,
        short_name: Some("glycerol"),
        category: Category::Zgm,
    },
];

const SEED_REAGENTS: [SeedReagent; 14] = [
    SeedReagent {
        name: "Fumed silica",
        formula: "SiO2",
        molar_weight: 60.08,
        short_name: Some("fumed silica"),
        kind: ReagentKind::Reactant,
        concentration: 1.0,
        cas: "112945-52-5",
        density: 2.20,
    },
    SeedReagent {
        name: "Colloidal silica LUDOX HS-40",
        formula: "SiO2",
        molar_weight: 60.08,
        short_name: Some("LUDOX HS-40"),
        kind: ReagentKind::Mixture,
        concentration: 0.40,
        cas: "7631-86-9",
        density: 1.30,
    },
    SeedReagent {
        name: "Sodium aluminate",
        formula: "NaAlO2",
        molar_weight: 81.97,
        short_name: None,
        kind: ReagentKind::Reactant,
        concentration: 1.0,
        cas: "1302-42-7",
        density: 1.50,
    },
    SeedReagent {
        name: "Aluminium hydroxide",
        formula: "Al(OH)3",
        molar_weight: 78.00,
        short_name: None,
        kind: ReagentKind::Reactant,
        concentration: 1.0,
        cas: "21645-51-2",
        density: 2.42,
    },
    SeedReagent {
        name: "Sodium hydroxide",
        formula: "NaOH",
        molar_weight: 40.00,
        short_name: None,
        kind: ReagentKind::Mixture,
        concentration: 0.775,
        cas: "1310-73-2",
        density: 2.13,
    },
    SeedReagent {
        name: "Sodium hydroxide solution 50%",
        formula: "NaOH",
        molar_weight: 40.00,
        short_name: Some("NaOH 50%"),
        kind: ReagentKind::Solution,
        concentration: 0.50,
        cas: "1310-73-2",
        density: 1.52,
    },
    SeedReagent {
        name: "Potassium hydroxide",
        formula: "KOH",
        molar_weight: 56.11,
        short_name: None,
        kind: ReagentKind::Reactant,
        concentration: 0.85,
        cas: "1310-58-3",
        density: 2.12,
    },
    SeedReagent {
        name: "Tetrapropylammonium hydroxide solution 40%",
        formula: "C12H29NO",
        molar_weight: 203.37,
        short_name: Some("TPAOH 40%"),
        kind: ReagentKind::Solution,
        concentration: 0.40,
        cas: "4499-86-9",
        density: 1.00,
    },
    SeedReagent {
        name: "Tetramethylammonium hydroxide pentahydrate",
        formula: "C4H13NO(H2O)5",
        molar_weight: 181.23,
        short_name: Some("TMAOH.5H2O"),
        kind: ReagentKind::Reactant,
        concentration: 0.97,
        cas: "10424-65-4",
        density: 1.02,
    },
    SeedReagent {
        name: "Boric acid",
        formula: "H3BO3",
        molar_weight: 61.83,
        short_name: None,
        kind: ReagentKind::Reactant,
        concentration: 1.0,
        cas: "10043-35-3",
        density: 1.44,
    },
    SeedReagent {
        name: "Phosphoric acid 85%",
        formula: "H3PO4",
        molar_weight: 97.99,
        short_name: Some("H3PO4 85%"),
        kind: ReagentKind::Solution,
        concentration: 0.85,
        cas: "7664-38-2",
        density: 1.69,
    },
    SeedReagent {
        name: "Sodium silicate nonahydrate",
        formula: "Na2SiO3(H2O)9",
        molar_weight: 284.20,
        short_name: Some("water glass"),
        kind: ReagentKind::Reactant,
        concentration: 1.0,
        cas: "13517-24-3",
        density: 1.81,
    },
    SeedReagent {
        name: "Glycerol",
        formula: "C3H8O3",
        molar_weight: 92.09,
        short_name: None,
        kind: ReagentKind::Reactant,
        concentration: 1.0,
        cas: "56-81-5",
        density: 1.26,
    },
    SeedReagent {
        name: "Distilled water",
        formula: "H2O",
        molar_weight: 18.015,
        short_name: None,
        kind: ReagentKind::Reactant,
        concentration: 1.0,
        cas: "7732-18-5",
        density: 1.00,
    },
];

const SEED_LINKS: [SeedLink; 26] = [
    // Fumed silica -> SiO2
    SeedLink { reagent: 0, component: 0, coefficient: 1.0, reaction: None },
    // LUDOX -> SiO2 + H2O (mixture: split comes from the declared concentration)
    SeedLink { reagent: 1, component: 0, coefficient: 1.0, reaction: None },
    SeedLink { reagent: 1, component: 6, coefficient: 1.0, reaction: None },
    // Sodium aluminate -> Na2O + Al2O3
    SeedLink { reagent: 2, component: 2, coefficient: 0.5, reaction: Some(0) },
    SeedLink { reagent: 2, component: 1, coefficient: 0.5, reaction: Some(0) },
    // Aluminium hydroxide -> Al2O3 + 3 H2O
    SeedLink { reagent: 3, component: 1, coefficient: 0.5, reaction: Some(4) },
    SeedLink { reagent: 3, component: 6, coefficient: 1.5, reaction: Some(4) },
    // Sodium hydroxide pellets -> Na2O + H2O
    SeedLink { reagent: 4, component: 2, coefficient: 0.5, reaction: Some(1) },
    SeedLink { reagent: 4, component: 6, coefficient: 0.5, reaction: Some(1) },
    // Sodium hydroxide solution -> Na2O + H2O
    SeedLink { reagent: 5, component: 2, coefficient: 0.5, reaction: Some(1) },
    SeedLink { reagent: 5, component: 6, coefficient: 0.5, reaction: Some(1) },
    // Potassium hydroxide -> K2O + H2O
    SeedLink { reagent: 6, component: 3, coefficient: 0.5, reaction: Some(2) },
    SeedLink { reagent: 6, component: 6, coefficient: 0.5, reaction: Some(2) },
    // TPAOH solution -> (TPA)2O + H2O
    SeedLink { reagent: 7, component: 7, coefficient: 0.5, reaction: Some(3) },
    SeedLink { reagent: 7, component: 6, coefficient: 0.5, reaction: Some(3) },
    // TMAOH pentahydrate -> (TMA)2O + 11 H2O
    SeedLink { reagent: 8, component: 8, coefficient: 0.5, reaction: Some(7) },
    SeedLink { reagent: 8, component: 6, coefficient: 5.5, reaction: Some(7) },
    // Boric acid -> B2O3 + 3 H2O
    SeedLink { reagent: 9, component: 4, coefficient: 0.5, reaction: Some(5) },
    SeedLink { reagent: 9, component: 6, coefficient: 1.5, reaction: Some(5) },
    // Phosphoric acid -> P2O5 + 3 H2O
    SeedLink { reagent: 10, component: 5, coefficient: 0.5, reaction: Some(6) },
    SeedLink { reagent: 10, component: 6, coefficient: 1.5, reaction: Some(6) },
    // Sodium silicate nonahydrate -> Na2O + SiO2 + 9 H2O
    SeedLink { reagent: 11, component: 2, coefficient: 1.0, reaction: Some(8) },
    SeedLink { reagent: 11, component: 0, coefficient: 1.0, reaction: Some(8) },
    SeedLink { reagent: 11, component: 6, coefficient: 9.0, reaction: Some(8) },
    // Glycerol -> glycerol
    SeedLink { reagent: 12, component: 9, coefficient: 1.0, reaction: None },
    // Distilled water -> H2O
    SeedLink { reagent: 13, component: 6, coefficient: 1.0, reaction: None },
];

/// Build the builtin catalog. Each call returns a fresh, independent copy.
pub fn builtin_catalog() -> MemoryCatalog {
    let mut cat = MemoryCatalog::new();

    let reactions: Vec<_> = SEED_REACTIONS
        .iter()
        .map(|eq| cat.add_reaction(eq))
        .collect();

    let components: Vec<_> = SEED_COMPONENTS
        .iter()
        .map(|seed| {
            let mut new = NewComponent::new(
                seed.name,
                seed.formula,
                seed.molar_weight,
                seed.category,
            );
            if let Some(short) = seed.short_name {
                new = new.short_name(short);
            }
            cat.add_component(new)
        })
        .collect();

    let reagents: Vec<_> = SEED_REAGENTS
        .iter()
        .map(|seed| {
            let mut new = NewReagent::new(
                seed.name,
                seed.formula,
                seed.molar_weight,
                seed.kind,
                seed.concentration,
            )
            .cas(seed.cas)
            .density(seed.density);
            if let Some(short) = seed.short_name {
                new = new.short_name(short);
            }
            cat.add_reagent(new)
        })
        .collect();

    for link in &SEED_LINKS {
        let reagent = reagents[link.reagent];
        let component = components[link.component];
        let inserted = match link.reaction {
            Some(rx) => cat.link_via(reagent, component, link.coefficient, reactions[rx]),
            None => cat.link(reagent, component, link.coefficient),
        };
        inserted.expect("seed links reference seeded records exactly once");
    }

    cat
}
