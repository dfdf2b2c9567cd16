//! File-based namespace repository
//!
//! Namespaces are stored one YAML file per namespace:
//!
//! ```text
//! data/
//!   o.yml
//!   de.yml
//!   .de.yml
//! ```
//!
//! Each file is a mapping from `"<keyword> <argumentCount>"` to a shortcut
//! definition. Shortcuts are marked reachable on load unless the file says
//! otherwise.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use wayfinder_application::ports::{NamespaceSource, NamespaceSourceError};
use wayfinder_domain::{Namespace, Shortcut};

use crate::serialization::from_yaml_slice;

/// Loads namespaces from YAML files in a data directory, with an optional
/// user directory taking precedence for namespaces defined in both.
#[derive(Debug, Clone)]
pub struct YamlNamespaceRepository {
    data_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl YamlNamespaceRepository {
    /// Creates a repository over a site data directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            user_dir: None,
        }
    }

    /// Adds a user directory; its files shadow same-named site namespaces.
    #[must_use]
    pub fn with_user_dir(mut self, user_dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(user_dir.into());
        self
    }

    fn namespace_file(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.yml"))
    }

    async fn load_one(&self, name: &str) -> Result<Namespace, NamespaceSourceError> {
        if let Some(user_dir) = &self.user_dir {
            let path = Self::namespace_file(user_dir, name);
            if fs::try_exists(&path).await.unwrap_or(false) {
                let shortcuts = read_index(&path, name).await?;
                return Ok(Namespace {
                    shortcuts,
                    ..Namespace::user(name)
                });
            }
        }

        let path = Self::namespace_file(&self.data_dir, name);
        if !fs::try_exists(&path).await.unwrap_or(false) {
            tracing::warn!(name, path = %path.display(), "namespace file missing, loading empty");
            return Ok(Namespace::new(name));
        }

        let shortcuts = read_index(&path, name).await?;
        Ok(Namespace {
            shortcuts,
            ..Namespace::new(name)
        })
    }
}

/// Reads and parses one namespace index file.
async fn read_index(
    path: &Path,
    name: &str,
) -> Result<HashMap<String, Shortcut>, NamespaceSourceError> {
    let bytes = fs::read(path).await?;
    from_yaml_slice(&bytes).map_err(|e| NamespaceSourceError::Invalid {
        name: name.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl NamespaceSource for YamlNamespaceRepository {
    async fn load(&self, names: &[String]) -> Result<Vec<Namespace>, NamespaceSourceError> {
        let mut namespaces = Vec::with_capacity(names.len());
        for name in names {
            let namespace = self.load_one(name).await?;
            tracing::debug!(name = %name, shortcuts = namespace.len(), "namespace loaded");
            namespaces.push(namespace);
        }
        Ok(namespaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wayfinder_domain::NamespaceKind;

    fn write_namespace(dir: &Path, name: &str, yaml: &str) {
        std::fs::write(dir.join(format!("{name}.yml")), yaml).unwrap();
    }

    #[tokio::test]
    async fn loads_indexed_shortcuts() {
        let dir = tempfile::tempdir().unwrap();
        write_namespace(
            dir.path(),
            "o",
            "\"g 1\":\n  url: https://www.google.com/search?q=<query>\n\"w 1\":\n  url: https://en.wikipedia.org/wiki/<query>\n",
        );

        let repository = YamlNamespaceRepository::new(dir.path());
        let namespaces = repository.load(&["o".to_string()]).await.unwrap();

        assert_eq!(namespaces.len(), 1);
        assert_eq!(namespaces[0].name, "o");
        assert_eq!(namespaces[0].len(), 2);
        assert!(namespaces[0].find("g", 1).unwrap().reachable);
    }

    #[tokio::test]
    async fn missing_namespace_loads_empty_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        write_namespace(dir.path(), "o", "\"g 1\":\n  url: https://example.com/<query>\n");

        let repository = YamlNamespaceRepository::new(dir.path());
        let names = vec!["nonexistent".to_string(), "o".to_string()];
        let namespaces = repository.load(&names).await.unwrap();

        assert_eq!(namespaces.len(), 2);
        assert_eq!(namespaces[0].name, "nonexistent");
        assert!(namespaces[0].is_empty());
        assert_eq!(namespaces[1].name, "o");
    }

    #[tokio::test]
    async fn user_dir_shadows_site_namespace() {
        let site = tempfile::tempdir().unwrap();
        let user = tempfile::tempdir().unwrap();
        write_namespace(site.path(), "o", "\"g 1\":\n  url: https://site.example/<query>\n");
        write_namespace(user.path(), "o", "\"g 1\":\n  url: https://user.example/<query>\n");

        let repository = YamlNamespaceRepository::new(site.path()).with_user_dir(user.path());
        let namespaces = repository.load(&["o".to_string()]).await.unwrap();

        assert_eq!(namespaces[0].kind, NamespaceKind::User);
        assert_eq!(namespaces[0].find("g", 1).unwrap().url, "https://user.example/<query>");
    }

    #[tokio::test]
    async fn malformed_yaml_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        write_namespace(dir.path(), "broken", "\"g 1\": [not, a, shortcut]\n");

        let repository = YamlNamespaceRepository::new(dir.path());
        let error = repository.load(&["broken".to_string()]).await.unwrap_err();

        assert!(matches!(
            error,
            NamespaceSourceError::Invalid { ref name, .. } if name == "broken"
        ));
    }
}
