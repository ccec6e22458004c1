//! Tests for the local texture catalog

use super::*;
use std::io::Write;

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Texture::new(1, "Diamond Ore").with_description("Blue gems embedded in stone"),
        Texture::new(2, "Dialga Skin").with_description("Steel dragon scales"),
        Texture::new(3, "Oak Planks").with_description("Warm wooden boards"),
        Texture::new(4, "Stone Bricks").with_description("Grey masonry, diamond pattern"),
    ])
}

fn names(textures: &[Texture]) -> Vec<&str> {
    textures.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_blank_query_returns_nothing() {
    let catalog = sample_catalog();
    assert!(catalog.search("").is_empty());
    assert!(catalog.search("   ").is_empty());
}

#[test]
fn test_prefix_matches_by_name() {
    let catalog = sample_catalog();
    let results = catalog.search("dia");
    let found = names(&results);
    assert!(found.contains(&"Diamond Ore"));
    assert!(found.contains(&"Dialga Skin"));
    assert!(!found.contains(&"Oak Planks"));
}

#[test]
fn test_name_match_outranks_description_match() {
    let catalog = sample_catalog();
    let results = catalog.search("diamond");
    assert_eq!(results[0].name, "Diamond Ore");
    assert!(names(&results).contains(&"Stone Bricks"));
}

#[test]
fn test_all_terms_must_match() {
    let catalog = sample_catalog();
    let results = catalog.search("oak boards");
    assert_eq!(names(&results), vec!["Oak Planks"]);

    assert!(catalog.search("oak dragon").is_empty());
}

#[test]
fn test_results_are_capped() {
    let textures = (0..100)
        .map(|i| Texture::new(i, &format!("Brick {}", i)))
        .collect();
    let catalog = Catalog::new(textures);
    assert_eq!(catalog.search("brick").len(), MAX_CATALOG_RESULTS);
}

#[test]
fn test_from_json_rejects_non_list() {
    let result = Catalog::from_json(r#"{"name": "Oak"}"#);
    assert!(matches!(result, Err(TexsearchError::Catalog(_))));
}

#[test]
fn test_from_file_loads_textures() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"id": 1, "name": "Oak Planks"}, {"id": 2, "name": "Birch Planks"}]"#)
        .unwrap();

    let catalog = Catalog::from_file(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());
}

#[test]
fn test_debug_shows_size_only() {
    let debug = format!("{:?}", sample_catalog());
    assert!(debug.contains("Catalog"));
    assert!(debug.contains("textures: 4"));
}
