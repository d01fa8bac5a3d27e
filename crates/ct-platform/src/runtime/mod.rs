pub mod event_bus;
#[allow(clippy::module_inception)]
pub mod runtime;

pub use runtime::PlatformRuntime;
