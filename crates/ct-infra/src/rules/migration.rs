use anyhow::{bail, Result};
use ct_core::rules::{RuleId, Rules, CURRENT_SCHEMA_VERSION};
use tracing::{info, warn};

/// One schema upgrade step.
pub trait RuleMigration: Send + Sync {
    fn from_version(&self) -> u32;
    fn migrate(&self, rules: Rules) -> Rules;
}

/// Version 0 documents stored the boolean rules under snake_case keys.
/// Those keys ended up in `extra`; move them into the typed fields.
struct LegacyKeysMigration;

const LEGACY_KEYS: [&str; 3] = ["is_listen", "is_dete", "auto_copy"];

impl RuleMigration for LegacyKeysMigration {
    fn from_version(&self) -> u32 {
        0
    }

    fn migrate(&self, mut rules: Rules) -> Rules {
        for key in LEGACY_KEYS {
            let Some(value) = rules.extra.remove(key) else {
                continue;
            };
            if let Err(err) = rules.set(&RuleId::from_key(key), value) {
                warn!(key, error = %err, "Dropping invalid legacy rule value");
            }
        }
        rules.schema_version = 1;
        rules
    }
}

pub struct RuleMigrator {
    migrations: Vec<Box<dyn RuleMigration>>,
}

impl RuleMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![Box::new(LegacyKeysMigration)],
        }
    }

    pub fn migrate_to_latest(&self, mut rules: Rules) -> Result<Rules> {
        while rules.schema_version < CURRENT_SCHEMA_VERSION {
            let current = rules.schema_version;
            let Some(migration) = self.migrations.iter().find(|m| m.from_version() == current)
            else {
                bail!("no rule migration from schema version {current}");
            };
            rules = migration.migrate(rules);
            info!(from = current, to = rules.schema_version, "Migrated rules");
        }
        Ok(rules)
    }
}

impl Default for RuleMigrator {
    fn default() -> Self {
        Self::new()
    }
}
