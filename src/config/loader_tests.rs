use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
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

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/reports")
        .with_file("/reports/.wordtally.toml", "[chart]\nmax_words = 4\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.chart.max_words, 4);
}

#[test]
fn ignores_config_in_other_directories() {
    let fs = MockFileSystem::new()
        .with_current_dir("/reports")
        .with_file("/elsewhere/.wordtally.toml", "[chart]\nmax_words = 4\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.chart.max_words, 8);
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new().with_file(
        "/etc/custom.toml",
        "[input]\nlabel_column = \"Chapter\"\ndelimiter = \";\"\n",
    );

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/custom.toml"))
        .unwrap();

    assert_eq!(config.input.label_column, "Chapter");
    assert_eq!(config.input.delimiter, ';');
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nope.toml"))
        .unwrap_err();

    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("/nope.toml"));
}

#[test]
fn syntax_error_surfaces_as_toml_error() {
    let fs = MockFileSystem::new().with_file("/project/.wordtally.toml", "[chart\nwidth = ");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, WordTallyError::TomlParse(_)));
}

#[test]
fn invalid_values_fail_validation() {
    let fs = MockFileSystem::new().with_file("/project/.wordtally.toml", "[chart]\nheight = 0\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, WordTallyError::Config(_)));
}
