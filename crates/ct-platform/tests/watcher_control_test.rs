use ct_core::ports::{WatcherControlError, WatcherControlPort};
use ct_platform::ipc::PlatformCommand;
use ct_platform::runtime::event_bus::command_channel;
use ct_platform::InMemoryWatcherControl;

#[tokio::test]
async fn start_and_stop_are_delivered_in_order() {
    let (cmd_tx, mut cmd_rx) = command_channel();
    let control = InMemoryWatcherControl::new(cmd_tx);

    control.stop_watcher().await.unwrap();
    control.start_watcher().await.unwrap();

    assert_eq!(
        cmd_rx.recv().await,
        Some(PlatformCommand::StopClipboardWatcher)
    );
    assert_eq!(
        cmd_rx.recv().await,
        Some(PlatformCommand::StartClipboardWatcher)
    );
}

#[tokio::test]
async fn closed_runtime_reports_channel_closed() {
    let (cmd_tx, cmd_rx) = command_channel();
    drop(cmd_rx);
    let control = InMemoryWatcherControl::new(cmd_tx);

    assert!(matches!(
        control.start_watcher().await,
        Err(WatcherControlError::ChannelClosed)
    ));
    assert!(matches!(
        control.stop_watcher().await,
        Err(WatcherControlError::ChannelClosed)
    ));
}
