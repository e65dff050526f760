//! Brute Tabs
//!
//! Turns a container element holding a row of tab buttons and a stack of
//! content panes into a tabbed interface: activating a tab shows its pane
//! and hides the previously visible one, with optional transition effects.
//!
//! Element storage, class manipulation, click dispatch and animation timing
//! live in the sibling `brute-dom` crate; this crate owns the tab/pane
//! state and its sequencing. One controller attaches per container through
//! a caller-owned registry, and method calls dispatch through a closed
//! command set.

mod command;
mod config;
mod controller;
mod error;
mod registry;
mod tab_ref;
mod transition;

pub use command::Command;
pub use config::{ElementSource, PaneLookup, StyleHook, TabsConfig, DEFAULT_BASE_NAME};
pub use controller::TabController;
pub use error::TabsError;
pub use registry::TabsRegistry;
pub use tab_ref::TabRef;
pub use transition::{Completion, TransitionFn, TransitionSpec};

// Re-export the substrate types the public surface is built from
pub use brute_dom::{
    AnimationComplete, ClickEvent, Direction, Document, DomError, Effect, Element, ElementId,
    MouseButton, Selection,
};

pub type Result<T> = std::result::Result<T, TabsError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
