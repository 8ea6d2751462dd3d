use bc_batch::parse::{self, DEFAULT_DELIMITER};
use bc_batch::report::{batch_table, composition_table, matrix_table};
use bc_batch::{BatchError, BatchReport, BatchSession};
use bc_catalog::{CatalogError, CatalogSource, Category, MemoryCatalog, builtin_catalog};
use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "bc-cli")]
#[command(about = "Batch calculator - reagent masses for gel synthesis compositions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog components
    Components {
        /// Restrict to one category (zeolite, template, zgm)
        #[arg(long)]
        category: Option<Category>,
    },
    /// List reagents that can source the matched components
    Reagents {
        /// Free-text component queries (name, formula, or short name)
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Parse a composition string and show the (formula, moles) pairs
    Parse {
        /// Composition like "1SiO2:0.02Al2O3:40H2O"
        composition: String,
        /// Token delimiter
        #[arg(long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },
    /// Solve a batch: target composition in, reagent masses out
    Solve {
        /// Target composition, e.g. "1SiO2:0.02Al2O3:0.1Na2O:40H2O"
        #[arg(long)]
        composition: String,
        /// Reagent query, optionally with a concentration override like
        /// "NaOH 50%=0.48"; repeat once per reagent
        #[arg(long = "reagent", required = true)]
        reagents: Vec<String>,
        /// Divide all solved masses by this factor
        #[arg(long)]
        scale: Option<f64>,
        /// Rescale so the listed reagents sum to a mass, e.g. "0,1=100"
        #[arg(long)]
        sample: Option<String>,
        /// Print the batch matrix
        #[arg(long)]
        matrix: bool,
        /// Emit the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog = builtin_catalog();
    tracing::debug!(
        components = catalog.components().len(),
        reagents = catalog.reagents().len(),
        "builtin catalog loaded"
    );

    match cli.command {
        Commands::Components { category } => cmd_components(&catalog, category),
        Commands::Reagents { queries } => cmd_reagents(&catalog, &queries),
        Commands::Parse {
            composition,
            delimiter,
        } => cmd_parse(&composition, delimiter),
        Commands::Solve {
            composition,
            reagents,
            scale,
            sample,
            matrix,
            json,
        } => cmd_solve(
            &catalog,
            &composition,
            &reagents,
            scale,
            sample.as_deref(),
            matrix,
            json,
        ),
    }
}

fn cmd_components(catalog: &MemoryCatalog, category: Option<Category>) -> CliResult<()> {
    let categories = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };
    for category in categories {
        let components = catalog.components_by_category(category)?;
        if components.is_empty() {
            continue;
        }
        println!("{category}:");
        for c in components {
            println!("  {:<12} {:>8.3} g/mol  {}", c.formula, c.molar_weight, c.name);
        }
    }
    Ok(())
}

fn cmd_reagents(catalog: &MemoryCatalog, queries: &[String]) -> CliResult<()> {
    let mut ids = Vec::new();
    for query in queries {
        let component =
            catalog
                .find_component(query)
                .ok_or_else(|| BatchError::Validation {
                    what: format!("No component matches '{query}'"),
                })?;
        println!("Component: {} ({})", component.label(), component.name);
        ids.push(component.id);
    }

    let sourcing = catalog.reagents_sourcing(&ids)?;
    if sourcing.is_empty() {
        println!("No reagents can source this selection");
        return Ok(());
    }
    println!("Candidate reagents:");
    for r in sourcing {
        let cas = r.cas.as_deref().unwrap_or("-");
        println!(
            "  {:<42} {:>8}  c={:<5.3} {:>8.2} g/mol  CAS {}",
            r.name, r.kind, r.concentration, r.molar_weight, cas
        );
    }
    Ok(())
}

fn cmd_parse(composition: &str, delimiter: char) -> CliResult<()> {
    let pairs = parse::parse_composition_required(composition, delimiter)?;
    for (formula, moles) in &pairs {
        println!("  {moles:>10.4}  {formula}");
    }
    println!(
        "✓ {} components: {}",
        pairs.len(),
        parse::format_composition(&pairs, delimiter)
    );
    Ok(())
}

fn cmd_solve(
    catalog: &MemoryCatalog,
    composition: &str,
    reagent_specs: &[String],
    scale: Option<f64>,
    sample: Option<&str>,
    matrix: bool,
    json: bool,
) -> CliResult<()> {
    let mut session = BatchSession::new(catalog);

    for (formula, moles) in parse::parse_composition_required(composition, DEFAULT_DELIMITER)? {
        let component =
            catalog
                .find_component(&formula)
                .ok_or_else(|| BatchError::Validation {
                    what: format!("No component matches '{formula}'"),
                })?;
        session.select_component(component.id, moles)?;
    }

    for spec in reagent_specs {
        let (query, concentration) = split_reagent_spec(spec)?;
        let reagent = catalog
            .find_reagent(query)
            .ok_or_else(|| BatchError::Validation {
                what: format!("No reagent matches '{query}'"),
            })?;
        session.select_reagent(reagent.id)?;
        if let Some(c) = concentration {
            session.set_concentration(reagent.id, c)?;
        }
    }

    session.solve()?;

    if let Some(factor) = scale {
        session.rescale_all(factor)?;
    }
    if let Some(spec) = sample {
        let (indices, target) = split_sample_spec(spec)?;
        session.rescale_to_sample(&indices, target)?;
    }

    if json {
        let report = BatchReport::from_session(&session);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", composition_table(session.components()));
    println!("{}", batch_table(session.reagents()));
    if matrix {
        if let Some(b) = session.batch_matrix() {
            println!("{}", matrix_table(b, session.reagents(), session.components()));
        }
    }
    println!("✓ Batch solved: {} reagents", session.reagents().len());
    Ok(())
}

/// Split "QUERY" or "QUERY=CONC" into the query and the optional override.
fn split_reagent_spec(spec: &str) -> CliResult<(&str, Option<f64>)> {
    match spec.split_once('=') {
        None => Ok((spec.trim(), None)),
        Some((query, conc)) => {
            let value = conc
                .trim()
                .parse::<f64>()
                .map_err(|_| BatchError::Validation {
                    what: format!("Invalid concentration in '{spec}'"),
                })?;
            Ok((query.trim(), Some(value)))
        }
    }
}

/// Split "0,1=100" into the reagent indices and the target sample mass.
fn split_sample_spec(spec: &str) -> CliResult<(Vec<usize>, f64)> {
    let (indices, target) = spec.split_once('=').ok_or_else(|| BatchError::Validation {
        what: format!("Sample spec '{spec}' must look like IDX,..=MASS"),
    })?;
    let target = target
        .trim()
        .parse::<f64>()
        .map_err(|_| BatchError::Validation {
            what: format!("Invalid sample mass in '{spec}'"),
        })?;
    let indices = indices
        .split(',')
        .map(|i| {
            i.trim().parse::<usize>().map_err(|_| BatchError::Validation {
                what: format!("Invalid reagent index '{i}' in '{spec}'"),
            })
        })
        .collect::<Result<Vec<_>, BatchError>>()?;
    Ok((indices, target))
}
