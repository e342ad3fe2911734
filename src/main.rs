use anyhow::Result;
use tallylist::config::Config;
use tallylist::constants::GENERATE_CONFIG_FLAG;
use tallylist::logger::Logger;
use tallylist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == GENERATE_CONFIG_FLAG) {
        Config::generate_default_config(Config::get_default_config_path()?)?;
        return Ok(());
    }

    let config = Config::load()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter())?;
    log::info!("Starting tallylist");

    ui::run_app(&config, logger).await
}
