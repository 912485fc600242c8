use career_atlas::adapters::storage::storage_for;
use career_atlas::core::ConfigProvider;
use career_atlas::utils::error::ErrorSeverity;
use career_atlas::utils::{logger, validation::Validate};
use career_atlas::{AtlasConfig, AtlasEngine, AtlasError, CliConfig, ConsoleSurface, DatasetLoader};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting career-atlas");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "career-atlas failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: &CliConfig) -> Result<(), AtlasError> {
    let config: AtlasConfig = cli.resolve()?;
    config.validate()?;

    let storage = storage_for(&config.data_source()?);
    let dataset = DatasetLoader::new(storage, config.data_files().clone())
        .load()
        .await?;

    let mut engine = AtlasEngine::new(dataset)?;
    let range = engine.indices().year_range;
    tracing::info!(
        "Timeline {}..={}, industries: {}",
        range.min,
        range.max,
        engine.indices().industries.join(", ")
    );

    let format = cli.format;
    engine.attach_surface(|| Ok(ConsoleSurface::stdout(format)))?;

    let selection = config.filters.selection(range);
    let sets = engine.recompute(&selection)?;
    tracing::info!(
        "{} visible, {} highlighted at year {}",
        sets.visible.len(),
        sets.highlighted.len(),
        selection.year_cursor
    );

    if let Some(feature_id) = &cli.activate {
        match engine.activate(feature_id).cloned() {
            Some(activation) => {
                let json = serde_json::to_string_pretty(&activation)
                    .map_err(|e| AtlasError::output("activation", e))?;
                println!("{}", json);
                if activation.has_full_experience {
                    if let Some(detail) = engine.full_experience(&activation.role.id) {
                        println!("{}", detail.long_summary);
                    }
                }
            }
            None => eprintln!("No role found for feature {}", feature_id),
        }
    }

    engine.detach_surface();
    Ok(())
}
