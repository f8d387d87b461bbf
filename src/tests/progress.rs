use super::{PageProgress, ReadingProgress};
use crate::error::FolioError;
use std::io::Write;
use tempfile::NamedTempFile;

fn entry(path: &str, section: &str, offset: usize) -> PageProgress {
    PageProgress {
        path: path.to_string(),
        active_section: section.into(),
        scroll_offset: offset,
    }
}

#[test]
fn test_record_replaces_existing_page() {
    let mut progress = ReadingProgress::default();
    progress.record(entry("a.md", "intro", 0));
    progress.record(entry("b.md", "science", 12));
    progress.record(entry("a.md", "reflection", 40));

    assert_eq!(progress.pages.len(), 2);
    assert_eq!(progress.find("a.md").unwrap().active_section.as_str(), "reflection");
    assert_eq!(progress.find("b.md").unwrap().scroll_offset, 12);
    assert!(progress.find("c.md").is_none());
}

#[test]
fn test_json_shape() {
    let mut progress = ReadingProgress::default();
    progress.record(entry("a.md", "quran", 7));
    let json = serde_json::to_value(&progress).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "pages": [{"path": "a.md", "active_section": "quran", "scroll_offset": 7}]
        })
    );
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"pages":[{{"path":"a.md","active_section":"science","scroll_offset":3}}]}}"#
    )
    .unwrap();
    let progress = ReadingProgress::load(file.path()).unwrap();
    assert_eq!(progress.pages, [entry("a.md", "science", 3)]);
}

#[test]
fn test_load_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"pages\": 5}}").unwrap();
    assert!(matches!(
        ReadingProgress::load(file.path()),
        Err(FolioError::Json(_))
    ));
}
