pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod selection;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use selection::{SelectionEffect, SelectionOverlay};
pub use window_manager::{WindowController, WindowGeometry};
