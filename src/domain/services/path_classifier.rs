//! Path Classifier Domain Service
//!
//! Pure string functions that turn absolute filesystem paths into the
//! canonical, `/`-separated forms used as store keys, identifiers and
//! manifest paths.

use std::path::{Path, PathBuf};

/// Editor metadata sidecar suffix
pub const META_SUFFIX: &str = ".meta";

/// Bundler descriptor suffix
pub const DESCRIPTOR_SUFFIX: &str = ".manifest";

/// Marker/metadata files skipped when scanning a source tree
pub const SOURCE_IGNORED_SUFFIXES: &[&str] = &[".meta", ".ds_store"];

/// Marker/metadata files skipped when scanning produced output
pub const OUTPUT_IGNORED_SUFFIXES: &[&str] = &[".meta", ".manifest", ".ds_store"];

/// Replace every `\` with `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Extract the part of `path` rooted at `marker`.
///
/// Returns everything from the first segment equal to `marker` to the end of
/// the path, provided at least one non-empty segment follows it. Returns an
/// empty string when the path is not under such a root.
///
/// `classify("/work/game/Assets/Audio/click.wav", "Assets") == "Assets/Audio/click.wav"`
pub fn classify(path: &str, marker: &str) -> String {
    if marker.is_empty() {
        return String::new();
    }

    let normalized = normalize_separators(path);
    let segments: Vec<&str> = normalized.split('/').collect();

    for (index, segment) in segments.iter().enumerate() {
        if *segment != marker {
            continue;
        }
        let rest = segments[index + 1..].join("/");
        if !rest.is_empty() {
            return format!("{}/{}", marker, rest);
        }
    }

    String::new()
}

/// Drop the extension of the last path segment.
///
/// Names that start with a dot and have no other dot (`.gitignore`) are kept.
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        None | Some(0) => path,
        Some(dot) => &path[..name_start + dot],
    }
}

/// Last path segment without its extension.
pub fn file_stem(path: &str) -> &str {
    let stripped = strip_extension(path);
    let name_start = stripped.rfind(['/', '\\']).map_or(0, |i| i + 1);
    &stripped[name_start..]
}

/// Grouping tag: the text following `marker` in the first segment containing it.
///
/// `group_tag("Assets/Package_Audio/click.wav", "Package_") == "Audio"`
pub fn group_tag(path: &str, marker: &str) -> String {
    if marker.is_empty() {
        return String::new();
    }
    path.split(['/', '\\'])
        .find_map(|segment| {
            segment
                .find(marker)
                .map(|index| segment[index + marker.len()..].to_string())
        })
        .unwrap_or_default()
}

/// Whether the file name ends with one of `suffixes` (case-insensitive).
pub fn is_ignored(path: &str, suffixes: &[&str]) -> bool {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path).to_lowercase();
    suffixes.iter().any(|suffix| name.ends_with(suffix))
}

/// `/`-separated form of `path` relative to `root`; the whole path when it is not under `root`.
pub fn project_relative(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    normalize_separators(&relative.to_string_lossy())
}

/// `path` with `suffix` appended to its last component (`a/x.json` -> `a/x.json.meta`).
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut joined = path.as_os_str().to_owned();
    joined.push(suffix);
    PathBuf::from(joined)
}
