// Lexsift CLI - extraction result review from the terminal
// Fetches project snapshots from the extraction service, builds the
// question × document comparison matrix, filters it, and exports CSV.

mod exit_codes;
mod table;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use lexsift_client::{ClientError, ExtractClient, Project};
use lexsift_config::Settings;
use lexsift_engine::model::DocumentColumn;
use lexsift_engine::{apply, build, FilterState};
use lexsift_io::{export_as, ExportError, ExportFormat};

use exit_codes::{client_exit_code, EXIT_IO, EXIT_NO_DATA, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "lexsift")]
#[command(about = "Review and export AI-extracted answers from legal documents")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Extraction service base URL (overrides the settings file)
    #[arg(long, global = true, env = "LEXSIFT_API_BASE")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects known to the extraction service
    Projects {
        /// Emit the raw project list as JSON
        #[arg(long)]
        json: bool,
    },

    /// List source files available for new projects
    Files,

    /// Create a project over a set of named source files
    #[command(after_help = "\
Examples:
  lexsift create --name 'Acme MSA Review' --file acme_msa.pdf --file acme_sow.pdf
  lexsift create --name 'NDA batch' --description 'Q3 NDAs' --file nda_1.pdf")]
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// Optional free-form description
        #[arg(long)]
        description: Option<String>,

        /// Source file to include (repeatable)
        #[arg(long = "file", required = true)]
        files: Vec<String>,
    },

    /// Show the question × document comparison matrix for a project
    #[command(after_help = "\
Examples:
  lexsift show 7c1f2a9e
  lexsift show 7c1f2a9e --field 'Effective Date' --field 'Governing Law'
  lexsift show 7c1f2a9e --search delaware --min-confidence 60
  lexsift show 7c1f2a9e --high-confidence-only --json")]
    Show {
        /// Project id
        project_id: String,

        /// Question to include as a matrix row (repeatable; defaults from settings)
        #[arg(long = "field")]
        fields: Vec<String>,

        /// Case-insensitive search over questions, values, and citations
        #[arg(long)]
        search: Option<String>,

        /// Minimum confidence as an integer percentage (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_confidence: Option<u8>,

        /// Keep only answers with confidence >= 80%
        #[arg(long)]
        high_confidence_only: bool,

        /// Emit the resolved matrix as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Trigger extraction of the given questions across a project
    Generate {
        /// Project id
        project_id: String,

        /// Question to extract (repeatable; defaults from settings)
        #[arg(long = "field")]
        fields: Vec<String>,

        /// Quiet mode - only print errors
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Export a project's extraction results as CSV
    #[command(after_help = "\
Examples:
  lexsift export 7c1f2a9e
  lexsift export 7c1f2a9e --format excel --out ~/reviews
  lexsift export 7c1f2a9e --min-confidence 50 --field 'Termination Clause'")]
    Export {
        /// Project id
        project_id: String,

        /// Output flavor: plain CSV or Excel-friendly UTF-8-BOM CSV
        #[arg(long, value_enum, default_value = "csv")]
        format: FormatArg,

        /// Output directory (default: settings export_dir, then cwd)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Question to include as a matrix row (repeatable; defaults from settings)
        #[arg(long = "field")]
        fields: Vec<String>,

        /// Case-insensitive search over questions, values, and citations
        #[arg(long)]
        search: Option<String>,

        /// Minimum confidence as an integer percentage (0-100)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_confidence: Option<u8>,

        /// Keep only answers with confidence >= 80%
        #[arg(long)]
        high_confidence_only: bool,

        /// Quiet mode - only print errors
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Delete a project and its extraction results
    Delete {
        /// Project id
        project_id: String,

        /// Actually delete; without this flag the command only explains itself
        #[arg(long)]
        force: bool,
    },
}

/// Export flavor flag. Both write `.csv` files; `excel` adds a UTF-8 BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Excel,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Excel => ExportFormat::Excel,
        }
    }
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nengine:  lexsift-engine ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nengine:  lexsift-engine ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();
    let api_base = cli
        .api_base
        .unwrap_or_else(|| settings.api_base.clone());
    let client = ExtractClient::new(api_base.clone());

    match cli.command {
        Commands::Projects { json } => cmd_projects(&client, &api_base, json),
        Commands::Files => cmd_files(&client, &api_base),
        Commands::Create { name, description, files } => {
            cmd_create(&client, &api_base, &name, description.as_deref(), &files)
        }
        Commands::Show {
            project_id,
            fields,
            search,
            min_confidence,
            high_confidence_only,
            json,
        } => {
            let filter = filter_from_flags(search, min_confidence, high_confidence_only);
            cmd_show(&client, &api_base, &settings, &project_id, fields, &filter, json)
        }
        Commands::Generate { project_id, fields, quiet } => {
            cmd_generate(&client, &api_base, &settings, &project_id, fields, quiet)
        }
        Commands::Export {
            project_id,
            format,
            out,
            fields,
            search,
            min_confidence,
            high_confidence_only,
            quiet,
        } => {
            let filter = filter_from_flags(search, min_confidence, high_confidence_only);
            cmd_export(
                &client,
                &api_base,
                &settings,
                &project_id,
                format.into(),
                out,
                fields,
                &filter,
                quiet,
            )
        }
        Commands::Delete { project_id, force } => {
            cmd_delete(&client, &api_base, &project_id, force)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Create error from a service error with proper exit code.
    pub fn client(err: ClientError, api_base: &str) -> Self {
        let code = client_exit_code(&err);
        let hint = match &err {
            ClientError::Network(_) => {
                Some(format!("is the extraction service running at {}?", api_base))
            }
            ClientError::Http(404, _) => {
                Some("check the project id with `lexsift projects`".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Build a FilterState from command-line flags. Unset flags leave the
/// corresponding criterion at its inactive default.
fn filter_from_flags(
    search: Option<String>,
    min_confidence: Option<u8>,
    high_confidence_only: bool,
) -> FilterState {
    let mut filter = FilterState::default();
    if let Some(term) = search {
        filter.search_term = term;
    }
    if let Some(min) = min_confidence {
        filter.confidence_min = min;
    }
    filter.show_only_high_confidence = high_confidence_only;
    filter
}

/// Questions for the matrix: explicit --field flags win, otherwise the
/// settings defaults.
fn resolve_fields(fields: Vec<String>, settings: &Settings) -> Vec<String> {
    if fields.is_empty() {
        settings.default_fields.clone()
    } else {
        fields
    }
}

/// Consolidated matrix columns with the filter applied per column.
fn filtered_columns(project: &Project, filter: &FilterState) -> Vec<DocumentColumn> {
    let mut columns = project.consolidated_columns();
    if !filter.is_default() {
        for column in &mut columns {
            column.answers = apply(&column.answers, filter);
        }
    }
    columns
}

// ============================================================================
// projects / files / create
// ============================================================================

fn cmd_projects(client: &ExtractClient, api_base: &str, json: bool) -> Result<(), CliError> {
    let projects = client
        .list_projects()
        .map_err(|e| CliError::client(e, api_base))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects).unwrap());
        return Ok(());
    }

    if projects.is_empty() {
        eprintln!("no projects yet");
        return Ok(());
    }

    for project in &projects {
        println!(
            "{}  {}  [{}]  {} document(s), {} answer(s)",
            project.id,
            project.name,
            project.status,
            project.documents.len(),
            project.answers.len(),
        );
    }
    Ok(())
}

fn cmd_files(client: &ExtractClient, api_base: &str) -> Result<(), CliError> {
    let files = client
        .list_available_files()
        .map_err(|e| CliError::client(e, api_base))?;

    if files.is_empty() {
        eprintln!("no source files available");
        return Ok(());
    }
    for file in files {
        println!("{}", file);
    }
    Ok(())
}

fn cmd_create(
    client: &ExtractClient,
    api_base: &str,
    name: &str,
    description: Option<&str>,
    files: &[String],
) -> Result<(), CliError> {
    let project = client
        .create_project(name, description, files)
        .map_err(|e| CliError::client(e, api_base))?;

    eprintln!(
        "created project {} ({} file(s), status {})",
        project.id,
        files.len(),
        project.status,
    );
    eprintln!("next: lexsift generate {}", project.id);
    Ok(())
}

// ============================================================================
// show
// ============================================================================

fn cmd_show(
    client: &ExtractClient,
    api_base: &str,
    settings: &Settings,
    project_id: &str,
    fields: Vec<String>,
    filter: &FilterState,
    json: bool,
) -> Result<(), CliError> {
    let project = client
        .get_project(project_id)
        .map_err(|e| CliError::client(e, api_base))?;

    let questions = resolve_fields(fields, settings);
    let columns = filtered_columns(&project, filter);
    let matrix = build(&questions, &columns);

    if json {
        let value = serde_json::json!({
            "project": project.id,
            "name": project.name,
            "columns": matrix.columns.iter().map(|c| serde_json::json!({
                "id": c.id,
                "filename": c.filename,
            })).collect::<Vec<_>>(),
            "rows": matrix.rows.iter().map(|row| serde_json::json!({
                "question": row.question,
                "cells": row.cells.iter().map(|cell| match cell.answer() {
                    Some(record) => serde_json::json!({
                        "value": record.value,
                        "confidence": record.confidence,
                        "citation": record.citation,
                    }),
                    None => serde_json::Value::Null,
                }).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap());
        return Ok(());
    }

    print!("{}", table::render(&matrix));

    let active = filter.active_count();
    if active > 0 {
        eprintln!("{} filter(s) active", active);
    }
    Ok(())
}

// ============================================================================
// generate
// ============================================================================

fn cmd_generate(
    client: &ExtractClient,
    api_base: &str,
    settings: &Settings,
    project_id: &str,
    fields: Vec<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let questions = resolve_fields(fields, settings);

    client
        .generate_answers(project_id, &questions)
        .map_err(|e| CliError::client(e, api_base))?;

    if !quiet {
        eprintln!("extraction started for {} field(s)", questions.len());
        eprintln!("next: lexsift show {}", project_id);
    }
    Ok(())
}

// ============================================================================
// export
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn cmd_export(
    client: &ExtractClient,
    api_base: &str,
    settings: &Settings,
    project_id: &str,
    format: ExportFormat,
    out: Option<PathBuf>,
    fields: Vec<String>,
    filter: &FilterState,
    quiet: bool,
) -> Result<(), CliError> {
    let project = client
        .get_project(project_id)
        .map_err(|e| CliError::client(e, api_base))?;

    let questions = resolve_fields(fields, settings);
    let columns = filtered_columns(&project, filter);

    let artifact = export_as(&project.name, &questions, &columns, format).map_err(|e| match e {
        ExportError::NoData => CliError {
            code: EXIT_NO_DATA,
            message: "no data to export".to_string(),
            hint: Some("add fields with --field, or loosen the active filters".to_string()),
        },
        ExportError::Io(msg) => CliError::io(msg),
    })?;

    let dir = output_dir(out, settings);
    let path = artifact
        .write_to(&dir)
        .map_err(|e| CliError::io(e.to_string()))?;

    if !quiet {
        eprintln!(
            "export: wrote {} ({} question(s) × {} column(s), {})",
            path.display(),
            questions.len(),
            columns.len(),
            artifact.mime_type,
        );
    }
    Ok(())
}

/// Output directory: explicit flag, then settings, then cwd.
fn output_dir(out: Option<PathBuf>, settings: &Settings) -> PathBuf {
    out.or_else(|| settings.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ============================================================================
// delete
// ============================================================================

fn cmd_delete(
    client: &ExtractClient,
    api_base: &str,
    project_id: &str,
    force: bool,
) -> Result<(), CliError> {
    if !force {
        return Err(CliError::usage(format!(
            "refusing to delete project {} without --force",
            project_id
        ))
        .with_hint("deletion is permanent; re-run with --force to confirm"));
    }

    client
        .delete_project(project_id)
        .map_err(|e| CliError::client(e, api_base))?;

    eprintln!("deleted project {}", project_id);
    Ok(())
}
