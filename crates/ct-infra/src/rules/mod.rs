pub mod file_store;
pub mod migration;

pub use file_store::FileRuleStore;
pub use migration::{RuleMigration, RuleMigrator};
