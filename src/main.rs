use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use current_plan::{
    ErrorCode, FeatureFlags, PageConfig, PlanLookup, PlanPageSnapshot, PlanViewError,
    PlanViewStateDeriver,
};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Plan(#[from] PlanViewError),
    #[error("failed to read snapshot from stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("plan not found in catalog: {0}")]
    UnknownPlan(String),
    #[error("failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "current-plan", about = "Derive the My Plan page view state from a store snapshot")]
struct Cli {
    /// JSON plan catalog; overrides PLAN_CATALOG_PATH.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON translation table; overrides PLAN_TRANSLATIONS_PATH.
    #[arg(long)]
    translations: Option<PathBuf>,

    /// Enable a feature flag; repeatable. Adds to PLAN_FEATURE_FLAGS.
    #[arg(long = "feature")]
    features: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the view state for a snapshot read from a file or stdin.
    Derive {
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Print the catalog entry for a product slug.
    Lookup { slug: String },
    /// List the catalog's product slugs.
    Plans,
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    if let Err(e) = run(Cli::parse()) {
        match &e {
            CliError::Plan(inner) => tracing::error!(code = inner.error_code(), error = %inner, "current-plan failed"),
            other => tracing::error!(error = %other, "current-plan failed"),
        }
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(&cli)?;
    let catalog = config.catalog()?;
    let translator = config.translator()?;

    match cli.command {
        Command::Derive { snapshot } => {
            let raw = match snapshot {
                Some(path) => std::fs::read_to_string(&path).map_err(|e| PlanViewError::io(path.display().to_string(), e))?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let snapshot = PlanPageSnapshot::from_json(&raw)?;
            let deriver = PlanViewStateDeriver::new(&catalog, &*translator, &config.features);
            print_json(&serde_json::to_value(deriver.derive(&snapshot))?)
        }
        Command::Lookup { slug } => {
            let entry = catalog.lookup(&slug).ok_or_else(|| CliError::UnknownPlan(slug.clone()))?;
            print_json(&json!({
                "slug": entry.slug(),
                "title": entry.title(&*translator),
                "tagline": entry.tagline(&*translator),
            }))
        }
        Command::Plans => {
            for slug in catalog.slugs() {
                println!("{slug}");
            }
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<PageConfig, CliError> {
    let mut config = PageConfig::from_env()?;
    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }
    if let Some(path) = &cli.translations {
        config.translations_path = Some(path.clone());
    }
    if !cli.features.is_empty() {
        let names = config.features.iter().map(str::to_string).chain(cli.features.iter().cloned()).collect::<Vec<_>>();
        config.features = FeatureFlags::from_names(names)?;
    }
    Ok(config)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
