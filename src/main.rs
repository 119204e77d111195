// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tipscan::utils::logging::{
    format_count, format_error, format_info, format_step, format_success, format_warning,
};
use tipscan::{
    Config, DecoderRegistry, ExportManifest, JsonExporter, PipelineOrchestrator,
    ReportProcessor, TextExporter, Validator, file_identity, segment,
};
use tracing::{info, warn};

const SECTION_PREVIEW_CHARS: usize = 160;

#[derive(Parser)]
#[command(name = "tipscan")]
#[command(version)]
#[command(about = "Extract investigative identifiers from CyberTipline report text", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract identifiers from files or directories and export them
    Extract {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Output directory (overrides export.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write manifest.json
        #[arg(long)]
        json: bool,

        #[arg(short, long)]
        pretty: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Print the sections found in one document
    Sections { file: PathBuf },

    /// Print the content hash of each file
    Identify {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tipscan::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Extract {
            paths,
            output,
            json,
            pretty,
            progress,
        } => {
            cmd_extract(config, paths, output, json, pretty, progress).await?;
        }
        Commands::Sections { file } => {
            cmd_sections(&config, &file)?;
        }
        Commands::Identify { files } => {
            cmd_identify(&files)?;
        }
    }

    Ok(())
}

async fn cmd_extract(
    config: Config,
    paths: Vec<PathBuf>,
    output: Option<PathBuf>,
    json: bool,
    pretty: bool,
    progress: bool,
) -> Result<()> {
    let start_time = Instant::now();

    for path in &paths {
        Validator::validate_input_path(path)?;
    }

    let output_dir = output.unwrap_or_else(|| config.export.output_dir.clone());
    Validator::validate_output_dir(&output_dir)?;
    let write_manifest = json || config.export.write_manifest;
    let pretty = pretty || config.export.pretty;

    println!("{}", format_step(1, 2, "Extracting"));
    let mut pipeline = PipelineOrchestrator::new(config).with_progress(progress);
    let report = pipeline
        .run(&paths)
        .await
        .context("Extraction batch failed")?;

    for failure in &report.failures {
        eprintln!(
            "{}",
            format_error(&format!("{}: {}", failure.path.display(), failure.message))
        );
    }
    if !report.skipped.is_empty() {
        eprintln!(
            "{}",
            format_warning(&format!("{} file(s) already loaded, skipped", report.skipped.len()))
        );
    }

    println!("{}", format_step(2, 2, "Exporting"));
    let exporter = TextExporter::new(&output_dir).context("Failed to create output directory")?;
    let exported = exporter
        .export_all(pipeline.store())
        .context("Failed to write category files")?;

    for file in &exported {
        println!("{}", format_count(file.category.as_str(), file.entries));
    }

    if write_manifest {
        let manifest = ExportManifest::build(
            pipeline.store(),
            pipeline.registry().files(),
            &report.failures,
        );
        let path = JsonExporter::new(&output_dir)?
            .write_manifest(&manifest, pretty)
            .context("Failed to write manifest")?;
        println!("{}", format_info(&format!("Manifest: {}", path.display())));
    }

    let summary = format!(
        "{} file(s) loaded, {} failed, {} entries exported to {} in {:.2}s",
        report.loaded.len(),
        report.failures.len(),
        pipeline.store().total(),
        output_dir.display(),
        start_time.elapsed().as_secs_f64()
    );
    if report.has_failures() {
        println!("{}", format_warning(&summary));
    } else {
        println!("{}", format_success(&summary));
    }

    Ok(())
}

fn cmd_sections(config: &Config, file: &Path) -> Result<()> {
    Validator::validate_file_path(file)?;

    let documents = DecoderRegistry::default()
        .decode(file)
        .with_context(|| format!("Failed to decode {}", file.display()))?;
    let processor = ReportProcessor::new(&config.extraction);

    for document in documents {
        let text = processor.prepare_text(&document);
        if Validator::validate_content_not_empty(&text).is_err() {
            println!("{}", format_warning(&format!("{} is empty", document.source().display())));
            continue;
        }

        let sections = segment(&text);
        if sections.is_empty() {
            println!(
                "{}",
                format_warning(&format!("No section headings in {}", document.source().display()))
            );
            continue;
        }

        for section in sections.iter() {
            let marker = if config.extraction.sections.contains(&section.letter) {
                format_success(&section.heading)
            } else {
                format_info(&section.heading)
            };
            println!("{} {}", marker, section.title());
            println!(
                "    {}",
                Validator::truncate_text(&section.text.replace('\n', " "), SECTION_PREVIEW_CHARS)
            );
        }
    }

    let relevant: Vec<String> = config
        .extraction
        .sections
        .iter()
        .map(|letter| letter.to_string())
        .collect();
    println!(
        "{}",
        format_info(&format!("Relevant sections: {}", relevant.join(", ")))
    );

    Ok(())
}

fn cmd_identify(files: &[PathBuf]) -> Result<()> {
    for file in files {
        match file_identity(file) {
            Ok(identity) => println!("{}  {}", identity, file.display()),
            Err(e) => eprintln!("{}", format_error(&e.to_string())),
        }
    }
    Ok(())
}
