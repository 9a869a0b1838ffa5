use clap::Parser;
use pricewatch::cli::{Cli, Commands};
use pricewatch::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = pricewatch::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::History(args) => {
            tracing::debug!("Running history command");
            args.execute(&config).await?;
        }
        Commands::Alerts(args) => {
            tracing::debug!("Running alerts command");
            args.execute(&config).await?;
        }
        Commands::Watchlist(args) => {
            tracing::debug!("Running watchlist command");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  History: {} days, floor {}, volatility every {} days (step < {}), daily step < {}",
                config.history.window_days,
                config.history.floor,
                config.history.volatility_interval,
                config.history.volatility_step,
                config.history.daily_step
            );
            println!(
                "  Layout: tablet >= {}px, desktop >= {}px",
                config.layout.tablet_min_width, config.layout.desktop_min_width
            );
            println!(
                "  Telemetry: level={}, json={}",
                config.telemetry.log_level, config.telemetry.json
            );
            println!(
                "  Watchlist: keywords [{}], stores [{}]",
                config.watchlist.keywords.join(", "),
                config.watchlist.stores.join(", ")
            );
            println!("  Catalog: {} products", config.catalog.len());
            for entry in &config.catalog {
                println!("    {} ({} / {}): {} TL", entry.name, entry.platform, entry.store, entry.price);
            }
        }
    }

    Ok(())
}
