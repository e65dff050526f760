//! Brute DOM
//!
//! Minimal retained element tree backing the brute widget crates.
//! Elements carry class lists and a visibility flag; the document owns
//! namespaced click bindings and a tick-driven animation queue, so widget
//! crates can sequence asynchronous show/hide transitions without a real
//! rendering host.

mod animate;
mod document;
mod element;
mod error;
mod events;
mod selection;

pub use animate::{AnimationComplete, Direction, Effect};
pub use document::Document;
pub use element::{Element, ElementId};
pub use error::DomError;
pub use events::{ClickEvent, ClickHandler, MouseButton};
pub use selection::Selection;

pub type Result<T> = std::result::Result<T, DomError>;
