//! Splitting filesystem paths into individually sortable components

use crate::unicode_numbers;
use std::path::{Component, Path, MAIN_SEPARATOR_STR};

/// Most trailing suffixes split off a file name.
const MAX_SUFFIXES: usize = 2;
/// Longest suffix, leading dot included, still treated as an extension.
const MAX_SUFFIX_CHARS: usize = 5;

/// Split a path into its directory components, file stem and suffixes.
///
/// `/p/Folder (1)/file.tar.gz` becomes
/// `["/", "p", "Folder (1)", "file", ".tar", ".gz"]`. A suffix stops the
/// splitting when it looks like a version number (`.2`) or is longer than
/// five characters, and at most two suffixes are split off.
pub fn path_splitter(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut pending_prefix: Option<String> = None;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                pending_prefix = Some(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::RootDir => {
                let root = match pending_prefix.take() {
                    Some(prefix) => prefix + MAIN_SEPARATOR_STR,
                    None => MAIN_SEPARATOR_STR.to_string(),
                };
                parts.push(root);
            }
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(name) => {
                if let Some(prefix) = pending_prefix.take() {
                    parts.push(prefix);
                }
                parts.push(name.to_string_lossy().into_owned());
            }
        }
    }
    if let Some(prefix) = pending_prefix {
        parts.push(prefix);
    }

    let base = parts.pop().unwrap_or_else(|| ".".to_string());
    let suffixes = sortable_suffixes(&base);
    let joined: String = suffixes.concat();
    let stem = base.strip_suffix(joined.as_str()).unwrap_or(&base).to_string();

    parts.push(stem);
    parts.extend(suffixes.into_iter().map(str::to_string));
    parts.retain(|part| !part.is_empty());
    parts
}

/// [`path_splitter`] for a path given as a string.
pub fn split_path_str(s: &str) -> Vec<String> {
    path_splitter(Path::new(s))
}

/// All suffixes of a file name: `"a.tar.gz"` gives `[".tar", ".gz"]`.
///
/// Names ending in a dot have none, and leading dots (hidden files) are not
/// suffix separators.
fn suffixes(name: &str) -> Vec<&str> {
    if name.ends_with('.') {
        return Vec::new();
    }
    let trimmed = name.trim_start_matches('.');
    match trimmed.find('.') {
        Some(first) => {
            let tail = &trimmed[first..];
            let mut found = Vec::new();
            let mut start = 0;
            for (i, _) in tail.match_indices('.').skip(1) {
                found.push(&tail[start..i]);
                start = i;
            }
            found.push(&tail[start..]);
            found
        }
        None => Vec::new(),
    }
}

/// The trailing suffixes worth splitting off, in order.
fn sortable_suffixes(name: &str) -> Vec<&str> {
    let mut kept: Vec<&str> = suffixes(name)
        .into_iter()
        .rev()
        .enumerate()
        .take_while(|&(i, suffix)| {
            i < MAX_SUFFIXES
                && !looks_numeric(suffix)
                && !suffix.contains(' ')
                && suffix.chars().count() <= MAX_SUFFIX_CHARS
        })
        .map(|(_, suffix)| suffix)
        .collect();
    kept.reverse();
    kept
}

/// `.` followed by a decimal digit, e.g. `.2` or `.5a`.
fn looks_numeric(suffix: &str) -> bool {
    let mut chars = suffix.chars();
    chars.next() == Some('.') && chars.next().is_some_and(unicode_numbers::is_decimal_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    #[cfg(unix)]
    fn test_directories_then_stem_then_suffixes() {
        assert_eq!(
            split_path_str("/p/Folder (1)/file.tar.gz"),
            ["/", "p", "Folder (1)", "file", ".tar", ".gz"]
        );
        assert_eq!(split_path_str("/Folder (10)/"), ["/", "Folder (10)"]);
        assert_eq!(split_path_str("./a/b.txt"), ["a", "b", ".txt"]);
        assert_eq!(split_path_str("../a"), ["..", "a"]);
    }

    #[test]
    fn test_numeric_suffix_is_kept() {
        assert_eq!(split_path_str("file.2"), ["file.2"]);
        assert_eq!(split_path_str("file.2.txt"), ["file.2", ".txt"]);
        assert_eq!(split_path_str("v1.10.3"), ["v1.10.3"]);
    }

    #[test]
    fn test_long_and_many_suffixes() {
        assert_eq!(split_path_str("notes.markdown"), ["notes.markdown"]);
        assert_eq!(split_path_str("a.b.c.d"), ["a.b", ".c", ".d"]);
        assert_eq!(split_path_str("archive.tar.gz"), ["archive", ".tar", ".gz"]);
    }

    #[test]
    fn test_suffix_with_space_is_kept() {
        assert_eq!(split_path_str("file.a b"), ["file.a b"]);
        assert_eq!(split_path_str("Mr. Smith.txt"), ["Mr. Smith", ".txt"]);
    }

    #[test]
    fn test_dot_names() {
        assert_eq!(split_path_str("."), ["."]);
        assert_eq!(split_path_str(".."), [".."]);
        assert_eq!(split_path_str(".bashrc"), [".bashrc"]);
        assert_eq!(split_path_str(".config.json"), [".config", ".json"]);
        assert_eq!(split_path_str("name."), ["name."]);
    }

    #[test]
    fn test_str_and_path_agree() {
        for s in ["a/b/c.txt", "/x/y (2)/z.tar.gz", "rel/1.2.3"] {
            assert_eq!(split_path_str(s), path_splitter(&PathBuf::from(s)));
        }
    }
}
