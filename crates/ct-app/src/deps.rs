//! # Dispatch Dependencies / 依赖分组
//!
//! Parameter grouping for [`DispatchController`](crate::DispatchController)
//! construction. Not a builder: every field is required and there is no
//! hidden logic.

use std::sync::Arc;

use ct_core::ports::{RuleStorePort, TextNormalizerPort, TranslationPort, WatcherControlPort};

use crate::event::DispatchEventBus;

pub struct DispatchDeps {
    pub normalizer: Arc<dyn TextNormalizerPort>,
    pub translator: Arc<dyn TranslationPort>,
    pub rules: Arc<dyn RuleStorePort>,
    pub watcher: Arc<dyn WatcherControlPort>,
    pub events: DispatchEventBus,
}
