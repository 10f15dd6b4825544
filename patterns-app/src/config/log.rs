use env_logger::{Builder, Env};

use crate::AppError;

/// `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) -> Result<(), AppError> {
    Builder::from_env(Env::default().default_filter_or(default_level)).try_init()?;
    Ok(())
}
