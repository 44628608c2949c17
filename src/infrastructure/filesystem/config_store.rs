use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::entities::MultiRepoConfig;

/// Configuration store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Configuration file not found or unreadable at {}: {source}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {} is malformed: {source}", .path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads `.git-multi-repo.json` from a home directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    home: PathBuf,
}

impl ConfigStore {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn config_path(&self) -> PathBuf {
        MultiRepoConfig::config_path(&self.home)
    }

    /// Read and decode the configuration. No field is defaulted except the
    /// optional alias.
    pub async fn load(&self) -> Result<MultiRepoConfig, ConfigStoreError> {
        let path = self.config_path();
        let content = tokio::fs::read_to_string(&path).await.map_err(|source| {
            ConfigStoreError::ConfigNotFound {
                path: path.clone(),
                source,
            }
        })?;

        let config = Self::parse(&content, &path)?;
        tracing::debug!(
            path = %path.display(),
            repos = config.repos.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Decode configuration text; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<MultiRepoConfig, ConfigStoreError> {
        serde_json::from_str(content).map_err(|source| ConfigStoreError::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{RepoDescriptor, CONFIG_FILE_NAME};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), content).unwrap();
    }

    #[tokio::test]
    async fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            &temp_dir,
            r#"{
                "repos": [
                    { "name": "dotfiles", "path": "/home/me/dotfiles" },
                    { "name": "site", "alias": "blog", "path": "/home/me/site" }
                ]
            }"#,
        );

        let config = ConfigStore::new(temp_dir.path()).load().await.unwrap();
        assert_eq!(
            config.repos,
            vec![
                RepoDescriptor::new("dotfiles", "/home/me/dotfiles"),
                RepoDescriptor::new("site", "/home/me/site").with_alias("blog"),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path());

        let err = store.load().await.unwrap_err();
        match err {
            ConfigStoreError::ConfigNotFound { path, .. } => {
                assert_eq!(path, temp_dir.path().join(CONFIG_FILE_NAME));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        write_config(&temp_dir, "{ repos: ");

        let err = ConfigStore::new(temp_dir.path()).load().await.unwrap_err();
        assert!(matches!(err, ConfigStoreError::ConfigMalformed { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape() {
        let temp_dir = TempDir::new().unwrap();

        for content in [
            r#"{ "repositories": [] }"#,
            r#"{ "repos": {} }"#,
            r#"{ "repos": [ { "name": "a" } ] }"#,
            r#"{ "repos": [ { "name": 1, "path": "/a" } ] }"#,
            r#"[]"#,
        ] {
            write_config(&temp_dir, content);
            let err = ConfigStore::new(temp_dir.path()).load().await.unwrap_err();
            assert!(
                matches!(err, ConfigStoreError::ConfigMalformed { .. }),
                "content {content} should be malformed"
            );
        }
    }

    #[test]
    fn test_error_message_names_the_file() {
        let path = Path::new("/home/me/.git-multi-repo.json");
        let err = ConfigStore::parse("nope", path).unwrap_err();
        assert!(err.to_string().contains("/home/me/.git-multi-repo.json"));
    }
}
