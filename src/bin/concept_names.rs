//! Concept naming CLI
//!
//! Loads concepts from a YAML seed file and resolves their names and
//! descriptions for a locale.
//!
//! # Usage
//!
//! ```bash
//! # Best name for every concept, in en_GB
//! concept_names resolve --file seeds.yaml --locale en_GB
//!
//! # Short name for one concept
//! concept_names resolve --file seeds.yaml --concept 5089 --strategy best-short
//!
//! # List names with their designations
//! concept_names names --file seeds.yaml --include-voided
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use concept_naming::data_dictionary::DictionarySeed;
use concept_naming::{logging, Concept, ConceptId, Locale, NameCandidate, NamingConfig};

#[derive(Parser)]
#[command(name = "concept_names")]
#[command(version = "0.1.0")]
#[command(about = "Resolve localized concept names from a seed file")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json, text, or pretty (default)
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,

    /// Naming config YAML (defaults apply when not given)
    #[arg(long, global = true, env = "CONCEPT_NAMING_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
    Pretty,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Name for the locale, falling back to any name
    Name,
    /// Only an explicit preferred designation
    Preferred,
    /// Best compatible name
    Best,
    /// Best compatible short name
    BestShort,
    /// Shortest name regardless of locale
    Shortest,
}

impl Strategy {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Preferred => "preferred",
            Self::Best => "best",
            Self::BestShort => "best-short",
            Self::Shortest => "shortest",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a name per concept
    Resolve {
        /// Seed file
        #[arg(short, long)]
        file: PathBuf,

        /// Only this concept
        #[arg(short, long)]
        concept: Option<u32>,

        /// Locale such as en, en_GB or es (defaults to the configured current locale)
        #[arg(short, long)]
        locale: Option<String>,

        #[arg(short, long, default_value = "best", value_enum)]
        strategy: Strategy,

        /// Only accept a designation for exactly this locale
        #[arg(long)]
        exact: bool,
    },

    /// Resolve a description per concept
    Describe {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long)]
        concept: Option<u32>,

        #[arg(short, long)]
        locale: Option<String>,

        #[arg(long)]
        exact: bool,
    },

    /// List names and their designation tags
    Names {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long)]
        concept: Option<u32>,

        #[arg(long)]
        include_voided: bool,
    },
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    let result = load_config(cli.config.as_ref()).and_then(|config| match cli.command {
        Commands::Resolve {
            file,
            concept,
            locale,
            strategy,
            exact,
        } => cmd_resolve(&config, file, concept, locale, strategy, exact, cli.format),
        Commands::Describe {
            file,
            concept,
            locale,
            exact,
        } => cmd_describe(&config, file, concept, locale, exact, cli.format),
        Commands::Names {
            file,
            concept,
            include_voided,
        } => cmd_names(&config, file, concept, include_voided, cli.format),
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!(r#"{{"error": "{}"}}"#, e.replace('"', "\\\""));
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_resolve(
    config: &NamingConfig,
    file: PathBuf,
    concept: Option<u32>,
    locale: Option<String>,
    strategy: Strategy,
    exact: bool,
    format: OutputFormat,
) -> Result<(), String> {
    let locale = parse_locale(locale)?;
    let concepts = select(load_concepts(config, file)?, concept)?;

    let resolved: Vec<(Arc<Concept>, Option<NameCandidate>)> = concepts
        .into_iter()
        .map(|c| {
            let name = match strategy {
                Strategy::Name => c.get_name_exact(locale.as_ref(), exact),
                Strategy::Preferred => c.get_preferred_name(locale.as_ref()),
                Strategy::Best => c.get_best_name(locale.as_ref()),
                Strategy::BestShort => c.get_best_short_name(locale.as_ref()),
                Strategy::Shortest => c.get_shortest_name(locale.as_ref(), exact),
            };
            (c, name)
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = resolved
                .iter()
                .map(|(c, name)| {
                    serde_json::json!({
                        "concept_id": c.id(),
                        "strategy": strategy.as_str(),
                        "name": name,
                    })
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Text => {
            for (c, name) in &resolved {
                let text = name.as_ref().map(|n| n.name.as_str()).unwrap_or("");
                println!("{}\t{}", c.id(), text);
            }
        }
        OutputFormat::Pretty => {
            for (c, name) in &resolved {
                match name {
                    Some(name) => println!(
                        "{} {} {} ({})",
                        "OK".green(),
                        c.id().to_string().bold(),
                        name.name.green().bold(),
                        name.locale
                    ),
                    None => println!(
                        "{} {} no {} name",
                        "--".yellow(),
                        c.id().to_string().bold(),
                        strategy.as_str()
                    ),
                }
            }
        }
    }

    Ok(())
}

fn cmd_describe(
    config: &NamingConfig,
    file: PathBuf,
    concept: Option<u32>,
    locale: Option<String>,
    exact: bool,
    format: OutputFormat,
) -> Result<(), String> {
    let locale = parse_locale(locale)?;
    let concepts = select(load_concepts(config, file)?, concept)?;

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = concepts
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "concept_id": c.id(),
                        "description": c.get_description(locale.as_ref(), exact),
                    })
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            for c in &concepts {
                match c.get_description(locale.as_ref(), exact) {
                    Some(d) => println!(
                        "{} {}: {} ({})",
                        c.id().to_string().bold(),
                        c.display_string(),
                        d.description,
                        d.locale
                    ),
                    None => println!(
                        "{} {}: {}",
                        c.id().to_string().bold(),
                        c.display_string(),
                        "no description".yellow()
                    ),
                }
            }
        }
    }

    Ok(())
}

fn cmd_names(
    config: &NamingConfig,
    file: PathBuf,
    concept: Option<u32>,
    include_voided: bool,
    format: OutputFormat,
) -> Result<(), String> {
    let concepts = select(load_concepts(config, file)?, concept)?;

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = concepts
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "concept_id": c.id(),
                        "kind": c.kind(),
                        "retired": c.is_retired(),
                        "names": c.get_names(include_voided),
                    })
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            for c in &concepts {
                println!("{} [{}]", c.id().to_string().bold(), c.kind().as_str());
                for name in c.get_names(include_voided) {
                    let tags: Vec<String> = name.tags().iter().map(ToString::to_string).collect();
                    let line = format!("  {} ({}) {}", name.name, name.locale, tags.join(" "));
                    if name.voided {
                        println!("{}", line.dimmed());
                    } else {
                        println!("{}", line);
                    }
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

fn load_config(path: Option<&PathBuf>) -> Result<NamingConfig, String> {
    match path {
        Some(path) => NamingConfig::from_file(path).map_err(|e| format!("{e:#}")),
        None => NamingConfig::from_env().map_err(|e| format!("{e:#}")),
    }
}

fn load_concepts(config: &NamingConfig, file: PathBuf) -> Result<Vec<Arc<Concept>>, String> {
    DictionarySeed::from_file(&file)
        .and_then(|seed| seed.build(config))
        .map_err(|e| format!("{e:#}"))
}

fn select(concepts: Vec<Arc<Concept>>, only: Option<u32>) -> Result<Vec<Arc<Concept>>, String> {
    match only {
        None => Ok(concepts),
        Some(id) => {
            let id = ConceptId::new(id);
            let found: Vec<_> = concepts.into_iter().filter(|c| c.id() == id).collect();
            if found.is_empty() {
                return Err(format!("concept {id} not found"));
            }
            Ok(found)
        }
    }
}

fn parse_locale(locale: Option<String>) -> Result<Option<Locale>, String> {
    locale
        .map(|l| l.parse::<Locale>().map_err(|e| e.to_string()))
        .transpose()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value)
            .map_err(|e| format!("JSON serialization failed: {}", e))?
    );
    Ok(())
}
