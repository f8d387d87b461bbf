use super::Config;
use crate::error::FolioError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_matches_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = Config::parse("threshold = 0.5\nsmooth_scroll = false\nmargin_top = -2\n").unwrap();
    assert!((config.threshold - 0.5).abs() < f32::EPSILON);
    assert!(!config.smooth_scroll);
    assert_eq!(config.margin_top, -2);
    assert_eq!(config.wrap_width, 100);
    assert_eq!(config.file_extensions, ["md"]);
}

#[test]
fn test_threshold_out_of_range_is_rejected() {
    assert!(matches!(
        Config::parse("threshold = 1.5"),
        Err(FolioError::Config(_))
    ));
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "wrap_width = \"wide\"").unwrap();
    assert_eq!(Config::load_from(file.path()), Config::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        Config::load_from(&dir.path().join("folio.toml")),
        Config::default()
    );
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "wrap_width = 72\nfile_extensions = [\"md\", \"markdown\"]").unwrap();
    let config = Config::load_from(file.path());
    assert_eq!(config.wrap_width, 72);
    assert_eq!(config.file_extensions, ["md", "markdown"]);
}
