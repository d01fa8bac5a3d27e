pub mod in_memory_watcher_control;

pub use in_memory_watcher_control::InMemoryWatcherControl;
