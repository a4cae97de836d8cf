//! Source tree fixtures.

/// A small content tree: two audio clips, a prefab and a resource icon.
pub const SAMPLE_TREE: &[(&str, &str)] = &[
    ("Assets/AssetBundles/Audio/click.wav", "click"),
    ("Assets/AssetBundles/Audio/boom.wav", "boom"),
    ("Assets/AssetBundles/UI/Button.prefab", "button"),
    ("Assets/Resources/icon.png", "png"),
];

/// The same name twice, differing only in case.
pub const CASE_COLLISION_TREE: &[(&str, &str)] = &[
    ("Assets/AssetBundles/Audio/click.wav", "lower"),
    ("Assets/AssetBundles/Audio/Click.wav", "upper"),
];
