mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{Config, DEFAULT_COLUMNS, DEFAULT_RUB_RATE, DEFAULT_TIME_DIVISOR};
pub use validation::validate_config_semantics;
