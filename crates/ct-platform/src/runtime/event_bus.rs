use tokio::sync::mpsc;

use crate::ipc::{PlatformCommand, PlatformEvent};

pub type PlatformEventSender = mpsc::Sender<PlatformEvent>;
pub type PlatformEventReceiver = mpsc::Receiver<PlatformEvent>;

pub type PlatformCommandSender = mpsc::Sender<PlatformCommand>;
pub type PlatformCommandReceiver = mpsc::Receiver<PlatformCommand>;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

pub fn event_channel() -> (PlatformEventSender, PlatformEventReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_CAPACITY)
}

pub fn command_channel() -> (PlatformCommandSender, PlatformCommandReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_CAPACITY)
}
