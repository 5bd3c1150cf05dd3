mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{CONFIG_VERSION, ColorConfig, Config};
pub use validation::{MAX_SHEET_NAME_LEN, validate_config_semantics, validate_file_name};
