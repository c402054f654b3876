pub mod file;
pub mod traits;

// Re-export
pub use file::{parse_yaml, YamlLogRepository, DEFAULT_LOG_FILE};
pub use traits::LogRepository;
