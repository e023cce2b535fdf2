//! Built-in hooks.

mod logging;
mod prevent_default;

pub use logging::LoggingHook;
pub use prevent_default::PreventDefaultHook;
