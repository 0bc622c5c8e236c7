use clap::Parser;
use wcag_audit_stats::core::{ConfigProvider, CsvSource};
use wcag_audit_stats::utils::{logger, validation::Validate};
use wcag_audit_stats::{AuditReportPipeline, LocalStorage, ReportConfig, ReportEngine};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "WCAG audit report with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "report-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the annotate.enabled setting from config
    #[arg(long)]
    annotate: Option<bool>,

    /// Dry run - show what would be processed without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_logger(args.verbose, args.json_logs);

    tracing::info!("🚀 Starting TOML-based report tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match ReportConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(annotate) = args.annotate {
        config.annotate.enabled = Some(annotate);
        tracing::info!("🔧 Download annotation overridden to: {}", annotate);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be fetched or written");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AuditReportPipeline::new(storage, config)?;
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Report generated");
            println!("✅ Report generated");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn describe_source(config: &ReportConfig) -> String {
    match config.source() {
        Some(CsvSource::Url(url)) => format!("CSV export {}", url),
        Some(CsvSource::Page(url)) => format!("download link on {}", url),
        Some(CsvSource::File(path)) => format!("local file {}", path),
        None => "none".to_string(),
    }
}

fn display_config_summary(config: &ReportConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Source: {}", describe_source(config));
    println!("  Catalog: {}", config.catalog_version());
    println!("  Output: {}", config.output_path());
    println!("  Locale: {}", config.locale());
    println!(
        "  Adequacy filter: {}",
        config.aggregate_options().apply_adequacy_filter
    );
    println!("  Annotate downloads: {}", config.annotate_downloads());

    if config.annotate_downloads() {
        println!("  Concurrent Requests: {}", config.concurrent_requests());
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &ReportConfig) -> anyhow::Result<()> {
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AuditReportPipeline::new(storage, config.clone())?;
    let catalog = pipeline.catalog();
    let targets = pipeline.target_criteria();

    println!("🔍 Dry Run Analysis:");
    println!();
    println!("📡 Data Source:");
    println!("  {}", describe_source(config));
    println!("  Timeout: {:?}", config.fetch_timeout());

    println!();
    println!(
        "📚 {} ({} criteria, {} targeted):",
        catalog.version(),
        catalog.len(),
        targets.len()
    );
    for id in &targets {
        match catalog.get(id) {
            Some(descriptor) => println!("  {} {} ({})", id, descriptor.title_nl, descriptor.level),
            None => println!("  {} ⚠️ not in catalog", id),
        }
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    println!("  Title: {}", config.render_options().title);

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");

    Ok(())
}
