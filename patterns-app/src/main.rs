use std::io;

use crate::config::app::AppConfig;
use log::info;
use thiserror::Error;

mod config;
mod demo;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unable to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("unable to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("course registry lock is poisoned")]
    RegistryPoisoned,
}

fn main() -> Result<(), AppError> {
    let app_config = AppConfig::new()?;
    crate::config::log::init(&app_config.log_level)?;
    info!("Starting with {:?}", app_config);

    let mut out = io::stdout();
    demo::greet(&mut out, &app_config);

    let newsletter = demo::run_newsletter(&app_config, io::stdout);
    info!("Newsletter announced {:?}", newsletter.course());

    let viewers = demo::run_singleton(singleton::global(), &app_config.renamed_courses)?;
    info!("Opened {} course viewers", viewers.len());

    Ok(())
}
