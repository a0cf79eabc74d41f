use clap::Parser;
use wunderscore::app::commands;
use wunderscore::utils::{logger, validation::Validate};
use wunderscore::{CliConfig, Settings};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入設定
    let settings = match &config.config {
        Some(path) => match Settings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    // 初始化日誌
    let verbose = config.verbose || settings.logging.verbose;
    if settings.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if verbose {
        tracing::debug!("Settings: {:?}", settings);
    }

    match commands::execute(&config.command, &settings) {
        Ok(output) => {
            println!("{}", serde_json::to_string(&output)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
