use clap::{Parser, ValueEnum};
use formflow::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetCli {
    Canonical,
    Gui,
}

/// Resolve identifiers and re-export a legal-form flowchart document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the canonical document JSON file
    document_path: String,

    /// Optional path to an export config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Decorate identifiers with their document name
    #[arg(long, conflicts_with = "no_prefix")]
    prefix: bool,

    /// Strip document-name prefixes from identifiers
    #[arg(long)]
    no_prefix: bool,

    /// The export format to produce
    #[arg(short, long, value_enum)]
    target: Option<TargetCli>,

    /// Print how the identifier of this cell is resolved
    #[arg(short, long)]
    explain: Vec<String>,

    /// Write the export here instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli);
}

fn run(cli: Cli) {
    let start = Instant::now();

    // --- 1. Configuration ---
    let mut config = match &cli.config {
        Some(path) => ExportConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => ExportConfig::default(),
    };
    if cli.prefix {
        config.policy = PrefixPolicy::with_prefix();
    } else if cli.no_prefix {
        config.policy = PrefixPolicy::without_prefix();
    }
    if let Some(target) = cli.target {
        config.target = match target {
            TargetCli::Canonical => TargetChoice::Canonical,
            TargetCli::Gui => TargetChoice::Gui,
        };
    }

    // --- 2. Import ---
    let json = fs::read_to_string(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read document file '{}': {}",
            &cli.document_path, e
        ))
    });
    let document = CanonicalDocument::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("{}", e)));

    let mut session = FormSession::new(config);
    session
        .load_document(document)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to import document: {}", e)));

    // --- 3. Explanations ---
    for cell in &cli.explain {
        match session.explain(&CellId::from(cell.as_str())) {
            Ok(Some(trace)) => eprintln!("{}\n", TraceFormatter::format_trace(&trace)),
            Ok(None) => eprintln!("No node '{}' in the document\n", cell),
            Err(e) => exit_with_error(&format!("{}", e)),
        }
    }

    // --- 4. Export ---
    match &cli.output {
        Some(path) => {
            let bytes = session
                .export_to_file(path)
                .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
            eprintln!(
                "Wrote {} bytes of {} export to '{}' in {:?}",
                bytes,
                format!("{:?}", session.config().target).to_lowercase(),
                path,
                start.elapsed()
            );
        }
        None => {
            let rendered = session
                .export()
                .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
            println!("{}", rendered);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
