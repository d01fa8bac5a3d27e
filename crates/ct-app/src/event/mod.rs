mod bus;
mod dispatch_event;

pub use bus::DispatchEventBus;
pub use dispatch_event::DispatchEvent;
