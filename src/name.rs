//! Project name derivation.
//! Turns an arbitrary destination path into an npm-compatible project identifier.

use crate::constants::DEFAULT_PROJECT_NAME;
use log::debug;
use regex::Regex;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9.-]+").expect("valid pattern"));

static EDGE_TRIM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-_.]+|-+$").expect("valid pattern"));

/// A normalized project identifier.
///
/// Always non-empty, made of `[a-z0-9.-]`, never starting with `-`, `_` or `.`
/// and never ending with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the generated service, `<name>api`.
    pub fn service_name(&self) -> String {
        format!("{}{}", self.0, crate::constants::SERVICE_SUFFIX)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a single path segment.
///
/// Returns an empty string when nothing usable is left.
pub fn normalize_segment(segment: &str) -> String {
    let replaced = DISALLOWED_RUN.replace_all(segment, "-");
    EDGE_TRIM.replace_all(&replaced, "").to_lowercase()
}

/// Creates a project name from the final segment of `path`.
///
/// The transform is total: any input that normalizes to nothing falls back
/// to [`DEFAULT_PROJECT_NAME`].
///
/// # Examples
/// ```
/// use mas::name::project_name;
///
/// assert_eq!(project_name("/home/me/My App").as_str(), "my-app");
/// assert_eq!(project_name("!!!").as_str(), "hello-mas");
/// ```
pub fn project_name<P: AsRef<Path>>(path: P) -> ProjectName {
    let segment = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let normalized = normalize_segment(&segment);
    if normalized.is_empty() {
        debug!("'{segment}' normalizes to nothing, using '{DEFAULT_PROJECT_NAME}'");
        ProjectName(DEFAULT_PROJECT_NAME.to_string())
    } else {
        ProjectName(normalized)
    }
}

/// Resolves `path` against the current directory and folds `.` and `..`
/// components lexically. Symlinks are not followed.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path.as_ref())?;
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
            && !name.starts_with(['-', '_', '.'])
            && !name.ends_with('-')
    }

    #[test]
    fn test_simple_names() {
        assert_eq!(project_name("myapp").as_str(), "myapp");
        assert_eq!(project_name("./myapp").as_str(), "myapp");
        assert_eq!(project_name("/srv/projects/Billing").as_str(), "billing");
        assert_eq!(project_name("api.v2").as_str(), "api.v2");
    }

    #[test]
    fn test_disallowed_runs_collapse() {
        assert_eq!(project_name("My_Cool App!!").as_str(), "my-cool-app");
        assert_eq!(project_name("a   b").as_str(), "a-b");
        assert_eq!(project_name("héllo wörld").as_str(), "h-llo-w-rld");
    }

    #[test]
    fn test_edges_are_trimmed() {
        assert_eq!(project_name("__private").as_str(), "private");
        assert_eq!(project_name(".hidden").as_str(), "hidden");
        assert_eq!(project_name("-.-name--").as_str(), "name");
        assert_eq!(project_name("name.").as_str(), "name.");
    }

    #[test]
    fn test_fallback_name() {
        assert_eq!(project_name("").as_str(), DEFAULT_PROJECT_NAME);
        assert_eq!(project_name("/").as_str(), DEFAULT_PROJECT_NAME);
        assert_eq!(project_name("___").as_str(), DEFAULT_PROJECT_NAME);
        assert_eq!(project_name("日本語").as_str(), DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_normalization_is_total() {
        let inputs = [
            "", " ", "-", "_", ".", "..", "...", "-_-", "a", "A-", "-a-", "_a_", ".a.",
            "Z z", "x!y", "tab\tname", "new\nline", "emoji 🚀 app", "--__..--", "9lives",
            "UPPER_CASE", "trailing-", "mixed.-_Case..",
        ];
        for input in inputs {
            let name = project_name(input);
            assert!(is_valid(name.as_str()), "{input:?} -> {name:?}");
        }
    }

    #[test]
    fn test_service_name() {
        assert_eq!(project_name("shop").service_name(), "shopapi");
    }

    #[test]
    fn test_resolve_path_folds_components() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_path(".").unwrap(), cwd);
        assert_eq!(resolve_path("a/./b/..").unwrap(), cwd.join("a"));
        assert_eq!(resolve_path("/tmp/x/../y").unwrap(), PathBuf::from("/tmp/y"));
    }
}
