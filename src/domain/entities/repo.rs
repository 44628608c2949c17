use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// リポジトリ記述子
///
/// One configured working copy. Loaded once per run and never mutated; the
/// path is not checked up front, failures surface per operation instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoDescriptor {
    /// 表示名
    pub name: String,

    /// 表示名に付け加える別名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// 作業コピーのパス
    pub path: PathBuf,
}

impl RepoDescriptor {
    /// 新しいRepoDescriptorを作成
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            path: path.into(),
        }
    }

    /// 別名を設定
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `name`, or `name (alias)` when an alias is configured.
    pub fn display_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} ({})", self.name, alias),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_without_alias() {
        let repo = RepoDescriptor::new("dotfiles", "/home/user/dotfiles");
        assert_eq!(repo.display_name(), "dotfiles");
    }

    #[test]
    fn test_display_name_with_alias() {
        let repo = RepoDescriptor::new("notes", "/home/user/notes").with_alias("work");
        assert_eq!(repo.display_name(), "notes (work)");
    }

    #[test]
    fn test_alias_is_optional_in_json() {
        let repo: RepoDescriptor =
            serde_json::from_str(r#"{"name": "a", "path": "/tmp/a"}"#).unwrap();
        assert!(repo.alias.is_none());
        assert_eq!(repo.path(), Path::new("/tmp/a"));
    }

    #[test]
    fn test_path_is_required_in_json() {
        let result = serde_json::from_str::<RepoDescriptor>(r#"{"name": "a"}"#);
        assert!(result.is_err());
    }
}
