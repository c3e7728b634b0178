use clap::{Parser, ValueEnum};
use feasibility::application::engine::FeasibilityEngine;
use feasibility::interfaces::csv::audit_writer::AuditWriter;
use feasibility::interfaces::json::assumptions_reader::AssumptionsReader;
use feasibility::interfaces::json::stream::serve_lines;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, BufReader};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The full result with its audit trail, as JSON
    Json,
    /// The audit trail as CSV
    Csv,
    /// The headline figures as CSV
    Summary,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Assumptions JSON file. Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Output format for a single appraisal.
    #[arg(long, value_enum, default_value_t = Format::Json, env = "FEASIBILITY_FORMAT")]
    format: Format,

    /// Answer one JSON request per input line with one JSON response per line.
    #[arg(long)]
    stream: bool,
}

impl Cli {
    fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_path() != Path::new("-"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = FeasibilityEngine::new();

    if cli.stream {
        let reader: Box<dyn AsyncBufRead + Unpin> = match cli.input_path() {
            Some(path) => Box::new(BufReader::new(
                tokio::fs::File::open(path).await.into_diagnostic()?,
            )),
            None => Box::new(BufReader::new(tokio::io::stdin())),
        };
        let summary = serve_lines(&engine, reader, tokio::io::stdout()).await?;
        eprintln!(
            "Answered {} requests ({} ok, {} invalid, {} malformed)",
            summary.total(),
            summary.ok,
            summary.invalid,
            summary.malformed
        );
        return Ok(());
    }

    let source: Box<dyn Read> = match cli.input_path() {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin().lock()),
    };
    let assumptions = AssumptionsReader::new(source).assumptions()?;
    let output = engine.compute(&assumptions);

    let stdout = io::stdout();
    match cli.format {
        Format::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &output).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
        Format::Csv => AuditWriter::new(stdout.lock()).write_audit(&output.audit)?,
        Format::Summary => AuditWriter::new(stdout.lock()).write_kpis(output.kpis())?,
    }

    Ok(())
}
