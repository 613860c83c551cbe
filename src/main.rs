use clap::Parser;
use deck_build::core::ConfigProvider;
use deck_build::utils::{logger, validation::Validate};
use deck_build::{BuildEngine, CliConfig, DeckPipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting deck-build");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading pipeline settings from {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(2);
                }
            };
            run_pipeline(config).await
        }
        None => run_pipeline(cli).await,
    }
}

async fn run_pipeline<C>(config: C) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let storage = LocalStorage::new(config.working_dir().to_string());
    let pipeline = DeckPipeline::new(storage, config);
    let engine = BuildEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Build pipeline completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Build pipeline completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Build pipeline failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                deck_build::utils::error::ErrorSeverity::Low => 0,
                deck_build::utils::error::ErrorSeverity::Medium => 2,
                deck_build::utils::error::ErrorSeverity::High => 1,
                deck_build::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
