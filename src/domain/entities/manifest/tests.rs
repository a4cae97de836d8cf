use super::*;

// === Artifact mappings ===

#[test]
fn new_mapping_is_unbuilt() {
    let mapping = ArtifactMapping::new(
        "audio/click",
        vec!["assets/assetbundles/audio/click.wav".to_string()],
        "1.0.3",
    );

    assert_eq!(mapping.identifier(), "audio/click");
    assert_eq!(mapping.version(), "1.0.3");
    assert_eq!(mapping.size(), "");
    assert_eq!(mapping.hash(), "");
    assert_eq!(mapping.group(), "");
    assert_eq!(mapping.extra(), "");
    assert!(!mapping.is_built());
}

#[test]
fn with_artifact_records_size_and_hex_digest() {
    let hash = ContentHash::from_bytes(b"bundle");
    let mapping = ArtifactMapping::new("ui/button", vec![], "1").with_artifact(6, &hash);

    assert_eq!(mapping.size(), "6");
    assert_eq!(mapping.hash(), hash.hex());
    assert!(mapping.is_built());
}

#[test]
fn with_group_sets_tag() {
    let mapping = ArtifactMapping::new("a", vec![], "1").with_group("Audio");
    assert_eq!(mapping.group(), "Audio");
}

// === Asset manifest ===

#[test]
fn asset_manifest_insert_and_get() {
    let mut manifest = AssetManifest::new();
    assert!(manifest.is_empty());

    manifest.insert("click", ArtifactMapping::new("audio/click", vec![], "1"));

    assert_eq!(manifest.len(), 1);
    assert!(manifest.contains("click"));
    assert_eq!(manifest.get("click").unwrap().identifier(), "audio/click");
}

#[test]
fn asset_manifest_names_are_sorted() {
    let mut manifest = AssetManifest::new();
    manifest.insert("b", ArtifactMapping::default());
    manifest.insert("a", ArtifactMapping::default());

    let names: Vec<&str> = manifest.names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

// === Resource manifest ===

#[test]
fn resource_manifest_insert_and_get() {
    let mut manifest = ResourceManifest::new();
    manifest.insert("Logo", "UI/Logo");

    assert_eq!(manifest.get("Logo"), Some("UI/Logo"));
    assert_eq!(manifest.len(), 1);
}
