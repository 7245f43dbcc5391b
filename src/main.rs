use clap::Parser;
use term_extract::utils::{logger, validation::Validate};
use term_extract::config::{select_output, select_source};
use term_extract::{CliConfig, ExtractError, ExtractorConfig, TermEngine, WriterSink};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting term-extract");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Term extraction failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), ExtractError> {
    cli.validate()?;

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = ExtractorConfig::from_file(path)?;
            config.validate()?;
            config
        }
        None => ExtractorConfig::default(),
    };

    if let Some(name) = file_config.name() {
        tracing::info!("Extractor: {}", name);
    }

    let (format, pretty) = select_output(cli, &file_config)?;
    let source = select_source(cli, &file_config)?;

    let sink = WriterSink::stdout(format).with_pretty(pretty);
    let mut engine = TermEngine::new(source, sink);
    let terms = engine.run()?;

    tracing::info!("✅ Emitted {} terms", terms.len());
    Ok(())
}
