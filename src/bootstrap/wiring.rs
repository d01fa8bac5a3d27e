//! Assembles the dispatch core with its adapters.

use std::sync::Arc;

use anyhow::Context;
use ct_app::{DispatchController, DispatchDeps, DispatchEventBus};
use ct_core::config::AppConfig;
use ct_core::ports::{RuleStorePort, SystemClipboardPort};
use ct_infra::{FileRuleStore, GoogleTranslateClient, WhitespaceNormalizer};
use ct_platform::ports::ClipboardRuntimePort;
use ct_platform::runtime::event_bus::{command_channel, event_channel, PlatformCommandSender};
use ct_platform::{
    InMemoryWatcherControl, LocalClipboard, NativeClipboardObserver, PlatformRuntime,
};
use tracing::info;

use super::config::translator_timeout;

/// Everything `main` needs to run the application.
pub struct AppRuntime {
    pub controller: DispatchController,
    pub platform: PlatformRuntime,
    pub commands: PlatformCommandSender,
    pub rules: Arc<dyn RuleStorePort>,
}

/// Wire against the real system clipboard.
pub async fn wire(config: &AppConfig) -> anyhow::Result<AppRuntime> {
    let clipboard: Arc<dyn SystemClipboardPort> =
        Arc::new(LocalClipboard::new().context("Failed to open system clipboard")?);
    let observer = Arc::new(NativeClipboardObserver::new(clipboard.clone()));
    wire_with(config, clipboard, observer).await
}

/// Wire with the given clipboard and change source.
pub async fn wire_with(
    config: &AppConfig,
    clipboard: Arc<dyn SystemClipboardPort>,
    observer: Arc<dyn ClipboardRuntimePort>,
) -> anyhow::Result<AppRuntime> {
    let (event_tx, event_rx) = event_channel();
    let (command_tx, command_rx) = command_channel();

    let rules: Arc<dyn RuleStorePort> = Arc::new(
        FileRuleStore::load(&config.rules_path)
            .await
            .context("Failed to load rules")?,
    );
    let translator = GoogleTranslateClient::new(
        config.translator_endpoint.clone(),
        translator_timeout(config),
    )?;

    let controller = DispatchController::new(DispatchDeps {
        normalizer: Arc::new(WhitespaceNormalizer::new()?),
        translator: Arc::new(translator),
        rules: rules.clone(),
        watcher: Arc::new(InMemoryWatcherControl::new(command_tx.clone())),
        events: DispatchEventBus::new(config.event_capacity),
    });

    let platform = PlatformRuntime::new(
        clipboard,
        observer,
        event_tx,
        event_rx,
        command_rx,
        Some(Arc::new(controller.clone())),
    );

    info!(
        rules = %config.rules_path.display(),
        endpoint = %config.translator_endpoint,
        "Application wired"
    );

    Ok(AppRuntime {
        controller,
        platform,
        commands: command_tx,
        rules,
    })
}
