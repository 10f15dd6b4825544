use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub greeting: String,
    pub log_level: String,
    pub course_name: String,
    pub course_max: i32,
    #[validate(length(min = 1))]
    pub displays: Vec<String>,
    pub renamed_courses: Vec<String>,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
