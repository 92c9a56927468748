//! Persisted settings for dataset location, training and chat behavior.
//!
//! Settings live in `config.toml` under the application directory. A missing
//! file is replaced by the defaults on first launch.

mod defaults;
mod io;
mod types;


/// Default filename used to store the app settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use io::{config_path, load_from_path, load_or_default, save_to_path};
pub use types::{AppSettings, ConfigError};

fn map_app_dir_error(error: crate::app_dirs::AppDirError) -> ConfigError {
    match error {
        crate::app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        crate::app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
