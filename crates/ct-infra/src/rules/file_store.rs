use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ct_core::ports::{RuleStoreError, RuleStorePort};
use ct_core::rules::{RuleId, Rules, CURRENT_SCHEMA_VERSION};
use serde_json::Value;
use tokio::fs;
use tracing::{debug, info};

use super::migration::RuleMigrator;

/// Rule store backed by a JSON document on disk.
/// 基于磁盘 JSON 文件的规则存储。
///
/// ## Behavior / 行为
/// - Reads and writes hit the in-memory copy
/// - [`RuleStorePort::persist`] replaces the file atomically with the current copy
/// - Keys outside the schema are kept and written back verbatim
pub struct FileRuleStore {
    path: PathBuf,
    rules: RwLock<Rules>,
}

impl FileRuleStore {
    /// Load the document at `path`.
    /// 从 `path` 加载规则文件。
    ///
    /// A missing file yields default rules and nothing is written until the
    /// first persist. Documents with an older schema version are migrated and
    /// the migrated copy is written back immediately.
    ///
    /// # Returns
    ///
    /// The loaded store, or an error with context `read rules failed: {path}`
    /// or `parse rules failed: {path}` when the file exists but cannot be used.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ct_core::ports::RuleStorePort;
    /// use ct_infra::FileRuleStore;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let store = FileRuleStore::load("/tmp/cliptrans/rules.json").await?;
    ///     println!("{}", store.language_pair().target);
    ///     Ok(())
    /// }
    /// ```
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = match fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No rule document, using defaults");
                return Ok(Self::with_rules(path, Rules::default()));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read rules failed: {}", path.display()))
            }
        };

        let rules: Rules = serde_json::from_str(&content)
            .with_context(|| format!("parse rules failed: {}", path.display()))?;
        let original_version = rules.schema_version;
        let migrated = RuleMigrator::new().migrate_to_latest(rules)?;

        let store = Self::with_rules(path, migrated);
        if original_version < CURRENT_SCHEMA_VERSION {
            store.write_snapshot().await?;
        }
        Ok(store)
    }

    /// Create a store over an in-memory document without touching the disk.
    pub fn with_rules(path: impl Into<PathBuf>, rules: Rules) -> Self {
        Self {
            path: path.into(),
            rules: RwLock::new(rules),
        }
    }

    /// Ensure the parent directory of the rule file exists.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success; an error with context `create rules dir failed: {dir}`
    /// if directory creation fails.
    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create rules dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Atomically write `content` to the rule file.
    /// 原子写入规则文件。
    ///
    /// The content goes to a `json.tmp` file next to the target, which is then
    /// renamed over it. Readers see either the previous document or the new one.
    ///
    /// # Returns
    ///
    /// `Ok(())` once the rename completed, `Err` with context if creating the
    /// directory, writing the temporary file or renaming failed.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp rules failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp rules to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    /// Serialize the in-memory copy and write it with [`Self::atomic_write`].
    async fn write_snapshot(&self) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.snapshot()).context("serialize rules failed")?;
        self.atomic_write(&content).await
    }
}

#[async_trait]
impl RuleStorePort for FileRuleStore {
    fn snapshot(&self) -> Rules {
        self.rules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_by_key(&self, key: &str, value: Value) -> Result<RuleId, RuleStoreError> {
        let rule = RuleId::from_key(key);
        self.rules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(&rule, value)?;
        debug!(%rule, "Rule set in memory");
        Ok(rule)
    }

    /// Persist the in-memory copy.
    ///
    /// The full error chain is flattened into [`RuleStoreError::Persist`].
    async fn persist(&self) -> Result<(), RuleStoreError> {
        self.write_snapshot()
            .await
            .map_err(|e| RuleStoreError::Persist(format!("{e:#}")))
    }
}
