mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{ChartConfig, Config, DEFAULT_BAR_COLOR, DEFAULT_MAX_WORDS, InputConfig};
