// src/main.rs
use clap::Parser;
use market_gap_analyzer::analysis::{AnalysisDepth, AnalysisReport, AnalysisRequest, BusinessSize};
use market_gap_analyzer::extractors::{extract_section, extract_table};
use market_gap_analyzer::groq::client::{self, CompletionClient, CompletionConfig};
use market_gap_analyzer::storage::StorageManager;
use market_gap_analyzer::utils::{self, AppError};
use std::path::PathBuf;

/// Command Line Interface for the AI Market Gap Analyzer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Industry to analyze (e.g. "Healthcare")
    #[arg(short, long)]
    industry: String,

    /// Region to focus on (optional, defaults to a global analysis)
    #[arg(short, long)]
    region: Option<String>,

    /// Size of the businesses the analysis targets
    #[arg(short = 's', long, value_enum, default_value_t = BusinessSize::Small)]
    business_size: BusinessSize,

    /// How detailed the analysis should be
    #[arg(short, long, value_enum, default_value_t = AnalysisDepth::Detailed)]
    depth: AnalysisDepth,

    /// Completion model name
    #[arg(long, default_value = client::DEFAULT_MODEL)]
    model: String,

    /// Maximum tokens the model may generate
    #[arg(long, default_value_t = client::DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = client::DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// API key for the completion service
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long, env = "GROQ_BASE_URL", default_value = client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Output directory for saved reports
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Analyze a previously saved response instead of calling the API
    #[arg(long)]
    response_file: Option<PathBuf>,

    /// Print the generated prompt and exit
    #[arg(long)]
    print_prompt: bool,

    /// Print the table following this keyword (repeatable)
    #[arg(long = "table")]
    tables: Vec<String>,

    /// Print the section following this title (repeatable)
    #[arg(long = "section")]
    sections: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load .env before clap so GROQ_API_KEY can live there
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();
    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    // 3. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!(
        "Starting analysis: industry={}, region={:?}, size={:?}, depth={:?}",
        args.industry, args.region, args.business_size, args.depth
    );

    let request = AnalysisRequest::new(
        &args.industry,
        args.region.as_deref(),
        args.business_size,
        args.depth,
    )?;
    let prompt = request.build_prompt();

    if args.print_prompt {
        println!("{}", prompt);
        return Ok(());
    }

    // 4. Obtain the model's markdown, either from disk or from the API
    let (markdown, model) = match &args.response_file {
        Some(path) => {
            tracing::info!("Reading saved response from {}", path.display());
            (std::fs::read_to_string(path)?, "offline".to_string())
        }
        None => {
            let config = CompletionConfig {
                model: args.model.clone(),
                base_url: args.base_url.clone(),
                max_tokens: args.max_tokens,
                temperature: args.temperature,
                ..CompletionConfig::new(args.api_key.clone().unwrap_or_default())
            };
            let completion_client = CompletionClient::new(config)?;
            let markdown = match completion_client.complete(&prompt).await {
                Ok(markdown) => markdown,
                Err(e) => {
                    tracing::error!("API Error: {}", e);
                    return Err(e.into());
                }
            };
            (markdown, completion_client.model().to_string())
        }
    };

    // 5. Print the full response, then any requested extractions
    println!("{}", markdown);

    for keyword in &args.tables {
        match extract_table(&markdown, keyword) {
            Some(table) => println!("\n### {}\n{}", keyword, table.to_markdown()),
            None => tracing::warn!("No table found after '{}'", keyword),
        }
    }
    for title in &args.sections {
        match extract_section(&markdown, title) {
            Some(section) => println!("\n### {}\n{}", title, section),
            None => tracing::warn!("No section found for '{}'", title),
        }
    }

    // 6. Save the report
    let report = AnalysisReport::from_response(request, &model, markdown);
    let storage = StorageManager::new(&args.output_dir)?;
    let saved = storage.save_report(&report)?;
    tracing::info!("Processing finished. Report saved to {}", saved.display());

    Ok(())
}
