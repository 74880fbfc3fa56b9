use clap::Parser;
use restaurant_registry::core::demo::build_demo_registry;
use restaurant_registry::utils::{logger, validation::Validate};
use restaurant_registry::{list_restaurants, CliConfig, RegistryConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting restaurant-registry");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let mut config = match RegistryConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let registry = build_demo_registry(config.ratings.policy)?;
    list_restaurants(&registry, &config.listing)?;

    Ok(())
}
