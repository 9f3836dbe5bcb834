use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use hms_core::codec::{self, DocumentFormat};
use hms_core::config::reference_date_from_env_value;
use hms_core::constants::AGE_REFERENCE_DATE_ENV;
use hms_core::transfer::{PatientCreateRequest, PatientUpdateRequest};
use hms_core::{MapperConfig, Patient, RecordMapper};
use hms_types::WorkflowCategory;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hms")]
#[command(about = "HMS patient record mapping CLI")]
struct Cli {
    /// Output document format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => DocumentFormat::Json,
            OutputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a new patient record from a create request and print its detail view
    Create {
        /// Create request document (.json, .yaml or .yml)
        request: PathBuf,
    },
    /// Apply an update request to a stored record and print the result
    Update {
        /// Stored patient record document
        record: PathBuf,
        /// Update request document
        request: PathBuf,
    },
    /// Print the detail view of stored records
    Show {
        /// Stored patient record documents
        #[arg(required = true)]
        records: Vec<PathBuf>,
    },
    /// Print the summary view of stored records
    Summary {
        /// Stored patient record documents
        #[arg(required = true)]
        records: Vec<PathBuf>,
    },
    /// List workflow categories
    Workflows,
}

/// Entry point for the `hms` CLI.
///
/// # Environment Variables
/// - `HMS_AGE_REFERENCE_DATE`: date (YYYY-MM-DD) used as "today" when computing ages
/// - `RUST_LOG`: tracing filter (default: `hms=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("hms=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let reference_date = reference_date_from_env_value(std::env::var(AGE_REFERENCE_DATE_ENV).ok())?;
    let cfg = Arc::new(MapperConfig::new(reference_date));
    if let Some(date) = cfg.reference_date() {
        tracing::info!("++ Computing ages as of {}", date);
    }
    let mapper = RecordMapper::new(cfg);

    let output = run(&mapper, cli.command, cli.output.into())?;
    println!("{output}");

    Ok(())
}

fn run(mapper: &RecordMapper, command: Commands, format: DocumentFormat) -> anyhow::Result<String> {
    match command {
        Commands::Create { request } => {
            let request: PatientCreateRequest = read_document(&request)?;
            let patient = mapper.to_record(request);
            Ok(codec::render(&mapper.to_response(&patient), format)?)
        }
        Commands::Update { record, request } => {
            let mut patient = read_record(&record)?;
            let request: PatientUpdateRequest = read_document(&request)?;
            mapper.apply_update(request, &mut patient);
            Ok(codec::render(&mapper.to_response(&patient), format)?)
        }
        Commands::Show { records } => {
            let patients = read_records(&records)?;
            Ok(codec::render(&mapper.to_response_list(&patients), format)?)
        }
        Commands::Summary { records } => {
            let patients = read_records(&records)?;
            Ok(codec::render(&mapper.to_summary_list(&patients), format)?)
        }
        Commands::Workflows => Ok(WorkflowCategory::ALL
            .iter()
            .map(|category| category.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = codec::parse(&text, DocumentFormat::from_path(path))
        .with_context(|| format!("invalid document {}", path.display()))?;
    Ok(document)
}

fn read_record(path: &Path) -> anyhow::Result<Patient> {
    let mut patient: Patient = read_document(path)?;
    patient.link_children();
    Ok(patient)
}

fn read_records(paths: &[PathBuf]) -> anyhow::Result<Vec<Patient>> {
    paths.iter().map(|path| read_record(path)).collect()
}
