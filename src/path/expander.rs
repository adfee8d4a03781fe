use super::PathError;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, PathError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, PathError> {
        if path.len() == 1 {
            // Just "~"
            self.get_home_dir()
        } else {
            let without_tilde = &path[1..];
            if let Some(stripped) = without_tilde.strip_prefix('/') {
                // "~/path"
                let mut home_path = self.get_home_dir()?;
                for part in stripped.split('/') {
                    if !part.is_empty() {
                        home_path.push(part);
                    }
                }
                Ok(home_path)
            } else {
                // "~username/path" is taken literally
                Ok(Path::new(path).to_path_buf())
            }
        }
    }

    pub fn get_home_dir(&self) -> Result<PathBuf, PathError> {
        dirs::home_dir().ok_or(PathError::HomeDirNotFound)
    }
}

/// Lexically normalize `path`: drop `.` and let `..` remove the previous
/// component. `..` never climbs above the root. The filesystem is not touched.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_untouched() -> Result<(), PathError> {
        let expander = PathExpander::new();
        assert_eq!(expander.expand("notes/today")?, PathBuf::from("notes/today"));
        Ok(())
    }

    #[test]
    fn test_tilde_expands_to_home() -> Result<(), PathError> {
        let expander = PathExpander::new();
        let home = expander.get_home_dir()?;

        assert_eq!(expander.expand("~")?, home);
        assert_eq!(expander.expand("~/a/b")?, home.join("a").join("b"));
        assert_eq!(expander.expand("~alice")?, PathBuf::from("~alice"));
        Ok(())
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
        assert_eq!(normalize(Path::new("/a/b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/a/../..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }
}
