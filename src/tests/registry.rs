use super::{RegistryError, SectionRegistry};
use crate::section::{Section, SectionId};

fn registry(ids: &[&str]) -> SectionRegistry {
    SectionRegistry::new(ids.iter().map(|id| Section::new(*id, id.to_uppercase())).collect())
        .unwrap()
}

#[test]
fn test_rejects_empty_and_duplicates() {
    assert_eq!(SectionRegistry::new(vec![]), Err(RegistryError::Empty));

    let dup = SectionRegistry::new(vec![
        Section::new("intro", "Intro"),
        Section::new("science", "Science"),
        Section::new("intro", "Again"),
    ]);
    assert_eq!(dup, Err(RegistryError::DuplicateId(SectionId::from("intro"))));
}

#[test]
fn test_next_follows_registry_order() {
    let reg = registry(&["intro", "science", "quran", "reflection"]);
    let ids: Vec<_> = reg.sections().iter().map(|s| s.id.clone()).collect();

    for (i, id) in ids.iter().enumerate() {
        let expected = &ids[(i + 1) % ids.len()];
        assert_eq!(&reg.next_after(id).id, expected);
    }
}

#[test]
fn test_next_wraps_from_last_to_first() {
    let reg = registry(&["intro", "science", "quran", "reflection"]);
    assert_eq!(reg.position(&"reflection".into()), Some(3));
    assert_eq!(reg.next_after(&"reflection".into()).id.as_str(), "intro");
}

#[test]
fn test_next_from_stale_id_lands_on_first() {
    let reg = registry(&["intro", "science"]);
    assert_eq!(reg.position(&"stale-id".into()), None);
    assert_eq!(reg.next_after(&"stale-id".into()).id.as_str(), "intro");
}

#[test]
fn test_single_section_next_is_itself() {
    let reg = registry(&["only"]);
    assert_eq!(reg.next_after(&"only".into()).id.as_str(), "only");
    assert_eq!(reg.previous_before(&"only".into()).id.as_str(), "only");
}

#[test]
fn test_previous_wraps_from_first_to_last() {
    let reg = registry(&["intro", "science", "quran"]);
    assert_eq!(reg.previous_before(&"intro".into()).id.as_str(), "quran");
    assert_eq!(reg.previous_before(&"quran".into()).id.as_str(), "science");
    assert_eq!(reg.previous_before(&"missing".into()).id.as_str(), "intro");
}

#[test]
fn test_lookup() {
    let reg = registry(&["intro", "science"]);
    assert_eq!(reg.len(), 2);
    assert!(!reg.is_empty());
    assert_eq!(reg.first().id.as_str(), "intro");
    assert_eq!(reg.get(&"science".into()).unwrap().title, "SCIENCE");
    assert!(reg.get(&"nope".into()).is_none());
}
