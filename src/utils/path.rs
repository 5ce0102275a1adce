//! Path rendering helpers.
//!
//! Output paths are anchored at the invocation root: the root's own base name
//! followed by the location relative to it, rather than absolute paths.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
///
/// Collapses redundant separators, drops `.` segments and resolves `..`
/// against a preceding normal segment. `..` directly under the root is
/// dropped. An empty result becomes `.`. The filesystem is never touched.
#[must_use]
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.into_iter().collect()
    }
}

/// Render `path` relative to `base`, prefixed by `base`'s own name.
///
/// When `path` and `base` are the same location only the base name is
/// returned. If no relative form exists (for example a path outside a base
/// that itself climbs with `..`), the normalized `path` is returned as is.
///
/// # Examples
///
/// ```
/// # use std::path::Path;
/// # use pdu_tools::utils::get_norm_path;
/// assert_eq!(get_norm_path(Path::new("/tmp/t/sub"), Path::new("/tmp/t")), "t/sub");
/// assert_eq!(get_norm_path(Path::new("/tmp/t/"), Path::new("/tmp/t")), "t");
/// ```
#[must_use]
pub fn get_norm_path(path: &Path, base: &Path) -> String {
    let base = normalize(base);
    let path = normalize(path);
    let name = base_name(&base);

    match relative_to(&path, &base) {
        Some(rel) if rel.as_os_str().is_empty() => name,
        Some(rel) => Path::new(&name).join(rel).display().to_string(),
        None => path.display().to_string(),
    }
}

/// Final component of an already normalized path, as shown to the user.
fn base_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => path.display().to_string(),
    }
}

/// Compute `path` relative to `base`; both must already be normalized.
///
/// Mixed absolute/relative inputs are resolved against the current directory.
fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    if path.is_absolute() != base.is_absolute() {
        let cwd = std::env::current_dir().ok()?;
        return relative_to(&normalize(&cwd.join(path)), &normalize(&cwd.join(base)));
    }

    let path_parts: Vec<Component<'_>> = meaningful(path);
    let base_parts: Vec<Component<'_>> = meaningful(base);

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    if base_parts[common..]
        .iter()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for component in &path_parts[common..] {
        rel.push(component);
    }

    Some(rel)
}

/// Components without the lone `.` that stands for an empty path.
fn meaningful(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("a//b/./c")), PathBuf::from("a/b/c"));
        assert_eq!(normalize(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("./a/")), PathBuf::from("a"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("../../a/..")), PathBuf::from("../.."));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_absolute() {
        assert_eq!(normalize(Path::new("/tmp//t/")), PathBuf::from("/tmp/t"));
        assert_eq!(normalize(Path::new("/../tmp")), PathBuf::from("/tmp"));
        assert_eq!(normalize(Path::new("/")), PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn test_get_norm_path_absolute() {
        let base = Path::new("/tmp/t");
        assert_eq!(get_norm_path(Path::new("/tmp/t"), base), "t");
        assert_eq!(get_norm_path(Path::new("/tmp/t/"), base), "t");
        assert_eq!(get_norm_path(Path::new("/tmp/t/sub"), base), "t/sub");
        assert_eq!(get_norm_path(Path::new("/tmp/t/sub/deep"), base), "t/sub/deep");
        assert_eq!(get_norm_path(Path::new("/tmp/t//sub/./x"), Path::new("/tmp/t/")), "t/sub/x");
    }

    #[test]
    fn test_get_norm_path_relative() {
        assert_eq!(get_norm_path(Path::new("t/sub"), Path::new("t")), "t/sub");
        assert_eq!(get_norm_path(Path::new("./t/sub"), Path::new("t/")), "t/sub");
        assert_eq!(get_norm_path(Path::new("t"), Path::new("t")), "t");
    }

    #[test]
    fn test_get_norm_path_current_dir_base() {
        assert_eq!(get_norm_path(Path::new("."), Path::new(".")), ".");
        assert_eq!(get_norm_path(Path::new("./sub"), Path::new(".")), "./sub");
    }

    #[test]
    fn test_get_norm_path_parent_dir_base() {
        assert_eq!(get_norm_path(Path::new("../sub"), Path::new("..")), "../sub");
        assert_eq!(get_norm_path(Path::new("../x/y"), Path::new("../x")), "x/y");
    }

    #[test]
    fn test_get_norm_path_sibling() {
        assert_eq!(get_norm_path(Path::new("a/c"), Path::new("a/b")), "b/../c");
    }

    #[cfg(unix)]
    #[test]
    fn test_get_norm_path_filesystem_root() {
        assert_eq!(get_norm_path(Path::new("/"), Path::new("/")), "/");
        assert_eq!(get_norm_path(Path::new("/usr"), Path::new("/")), "/usr");
    }

    #[test]
    fn test_relative_to_unreachable() {
        assert_eq!(relative_to(Path::new("a"), Path::new("../b")), None);
    }
}
