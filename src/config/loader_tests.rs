use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }
}

#[test]
fn load_without_path_returns_default() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load(None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_explicit_path() {
    let content = r#"
rub_rate = 92
time_divisor = 60
columns = ["Model"]
"#;
    let fs = MockFileSystem::new().with_file("/project/report-guard.toml", content);

    let loader = FileConfigLoader::with_fs(fs);
    let config = loader
        .load(Some(Path::new("/project/report-guard.toml")))
        .unwrap();

    assert_eq!(config.rub_rate, 92);
    assert_eq!(config.time_divisor, 60);
    assert_eq!(config.columns, vec!["Model".to_string()]);
}

#[test]
fn missing_file_is_config_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/project/missing.toml"))
        .unwrap_err();

    assert!(matches!(err, ReportGuardError::ConfigRead { .. }));
    assert!(err.to_string().contains("missing.toml"));
    assert!(err.suggestion().unwrap().contains("--config"));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/bad.toml", "this is not valid toml [[[");

    let loader = FileConfigLoader::with_fs(fs);
    let err = loader
        .load_from_path(Path::new("/project/bad.toml"))
        .unwrap_err();

    assert!(matches!(err, ReportGuardError::TomlParse(_)));
}

#[test]
fn semantic_errors_are_reported() {
    let fs = MockFileSystem::new().with_file("/project/zero.toml", "time_divisor = 0");

    let loader = FileConfigLoader::with_fs(fs);
    let err = loader
        .load_from_path(Path::new("/project/zero.toml"))
        .unwrap_err();

    assert!(matches!(err, ReportGuardError::Config(_)));
}

#[test]
fn real_loader_reads_from_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("report-guard.toml");
    std::fs::write(&path, "rub_rate = 100\n").unwrap();

    let config = FileConfigLoader::new().load_from_path(&path).unwrap();

    assert_eq!(config.rub_rate, 100);
}

#[test]
fn empty_column_list_is_rejected() {
    let fs = MockFileSystem::new().with_file("/project/empty.toml", "columns = []");

    let loader = FileConfigLoader::with_fs(fs);
    let err = loader
        .load_from_path(Path::new("/project/empty.toml"))
        .unwrap_err();

    assert!(matches!(err, ReportGuardError::Config(_)));
    assert!(err.to_string().contains("at least one label"));
}
