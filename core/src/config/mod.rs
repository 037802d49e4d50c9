mod load;
mod types;

pub use load::{
    expand_path, get_data_dir, load_default, load_from_path, GUEST_CONFIG_ENV, ROOT_ENV,
    SETTINGS_ENV,
};
pub use types::{AppConfig, GuestsConfig, LoggingConfig, PathsConfig, ToolsConfig};
