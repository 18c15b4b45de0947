mod loader;
mod model;
mod template;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LoadedConfig, RealFileSystem, parse_config,
};
pub use model::{
    CONFIG_FILE_NAME, CONFIG_VERSION, Config, OutputConfig, RegisterConfig, RulesConfig,
    ScannerConfig, TitleBlockConfig,
};
pub use template::generate_config_template;
pub use validation::validate_config_semantics;
