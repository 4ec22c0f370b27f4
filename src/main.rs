use cep_race::utils::logger;
use cep_race::{CepLookup, CliConfig, RaceConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌 (寫到 stderr)
    logger::init_cli_logger();

    tracing::debug!("CLI config: {:?}", config);

    let race_config = RaceConfig::default();
    let lookup = match CepLookup::from_config(&race_config) {
        Ok(lookup) => lookup,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    match lookup.lookup(&config.code).await {
        Ok(address) => {
            let json = address.to_json()?;
            println!("{}", json);
        }
        Err(e) => {
            tracing::debug!("Lookup failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
