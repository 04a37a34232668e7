// src/main.rs

use clap::Parser;
use resume_extractor::config::PipelineConfig;
use resume_extractor::document::DocumentKind;
use resume_extractor::extract::TesseractOcr;
use resume_extractor::ner::HeuristicTagger;
use resume_extractor::pipeline::{BatchOrchestrator, RecordAssembler};
use resume_extractor::storage::StorageManager;
use resume_extractor::utils::{self, AppError};
use std::path::PathBuf;
use std::sync::Arc;

/// Command Line Interface for the résumé field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input files to process (any mix of supported formats)
    inputs: Vec<PathBuf>,

    /// Directory whose plain files are added to the batch
    #[arg(short = 'd', long)]
    input_dir: Option<PathBuf>,

    /// Output directory for the extracted field tables
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Region assumed for phone numbers without a country prefix
    #[arg(long, default_value = "IN")]
    region: String,

    /// Tesseract language for OCR
    #[arg(long, default_value = "eng")]
    ocr_lang: String,

    /// Command used to render scanned PDF pages to images
    #[arg(long, default_value = "pdftoppm")]
    pdf_renderer: String,

    /// Command used to convert legacy .doc files to text
    #[arg(long, default_value = "antiword")]
    doc_converter: String,

    /// Embedded PDF text below this length triggers the OCR fallback
    #[arg(long, default_value = "20")]
    min_embedded_text: usize,

    /// Maximum number of files extracted concurrently
    #[arg(short, long, default_value = "4")]
    jobs: usize,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    let region = args
        .region
        .parse()
        .map_err(|_| AppError::Config(format!("Unknown phone region: {}", args.region)))?;

    let config = PipelineConfig {
        phone_region: region,
        ocr_lang: args.ocr_lang.clone(),
        pdf_renderer_cmd: args.pdf_renderer.clone(),
        doc_converter_cmd: args.doc_converter.clone(),
        min_embedded_text: args.min_embedded_text,
        max_concurrency: args.jobs,
    };

    // 3. Build the input file list. Only a failure here is fatal; everything
    //    downstream isolates to the single file.
    let paths = collect_inputs(&args)?;
    tracing::info!("Found {} input files", paths.len());

    let supported = paths
        .iter()
        .filter(|p| DocumentKind::from_path(p).is_some())
        .count();
    let skipped = paths.len() - supported;

    // 4. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 5. Run the batch
    let assembler = RecordAssembler::new(
        config,
        Arc::new(TesseractOcr::new(&args.ocr_lang)),
        Arc::new(HeuristicTagger::new()),
    );
    let orchestrator = BatchOrchestrator::new(assembler);
    let records = orchestrator.process_batch(&paths).await?;

    // 6. Persist the five field tables and batch metadata
    match storage.save_tables(&records) {
        Ok(paths) => tracing::info!("Saved {} field tables", paths.len()),
        Err(e) => tracing::error!("Failed to save field tables: {}", e),
    }
    match storage.save_batch_metadata(&records, skipped) {
        Ok(path) => tracing::info!("Saved batch metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save batch metadata: {}", e),
    }

    tracing::info!(
        "Processing finished. Records: {}, Skipped unsupported: {}",
        records.len(),
        skipped
    );

    Ok(())
}

/// Positional inputs plus (optionally) every plain file inside --input-dir.
fn collect_inputs(args: &Args) -> Result<Vec<PathBuf>, AppError> {
    let mut paths = args.inputs.clone();

    if let Some(dir) = &args.input_dir {
        let mut from_dir: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        from_dir.sort();
        paths.extend(from_dir);
    }

    if paths.is_empty() {
        return Err(AppError::NoInputs(
            args.input_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        ));
    }

    Ok(paths)
}
