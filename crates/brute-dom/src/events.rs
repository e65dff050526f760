//! Click dispatch
//!
//! Handlers are keyed by (element, namespace) so a widget can remove its own
//! bindings on teardown without disturbing anything else bound to the same
//! element. Dispatch bubbles from the clicked element up through its
//! ancestors; each bound ancestor sees itself as the event's current target.

use std::sync::Arc;

use crate::document::Document;
use crate::element::ElementId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// A click being delivered to a bound element.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    /// The element that was actually clicked
    pub target: ElementId,
    /// The bound ancestor currently receiving the event
    pub current_target: ElementId,
    pub button: MouseButton,
}

pub type ClickHandler = Arc<dyn Fn(&mut Document, &ClickEvent) + Send + Sync>;

pub(crate) struct Binding {
    pub(crate) namespace: String,
    pub(crate) handler: ClickHandler,
}

impl Document {
    /// Bind a click handler to `element` under `namespace`.
    pub fn on_click<F>(&mut self, element: ElementId, namespace: &str, handler: F)
    where
        F: Fn(&mut Document, &ClickEvent) + Send + Sync + 'static,
    {
        self.bindings.entry(element).or_default().push(Binding {
            namespace: namespace.to_string(),
            handler: Arc::new(handler),
        });
    }

    /// Remove every handler bound to `element` under `namespace`.
    ///
    /// Handlers registered under other namespaces stay bound.
    pub fn off_click(&mut self, element: ElementId, namespace: &str) {
        if let Some(bindings) = self.bindings.get_mut(&element) {
            bindings.retain(|b| b.namespace != namespace);
            if bindings.is_empty() {
                self.bindings.remove(&element);
            }
        }
    }

    /// Deliver a click on `target`, bubbling through its ancestor chain.
    ///
    /// Handlers are collected up front and then invoked with `&mut self`, so
    /// a handler may freely mutate the document, including unbinding itself.
    pub fn click(&mut self, target: ElementId, button: MouseButton) {
        let mut dispatch: Vec<(ElementId, Vec<ClickHandler>)> = Vec::new();

        let mut current = Some(target);
        while let Some(id) = current {
            if let Some(bindings) = self.bindings.get(&id) {
                dispatch.push((id, bindings.iter().map(|b| Arc::clone(&b.handler)).collect()));
            }
            current = self.parent(id);
        }

        tracing::debug!(target = %target, handlers = dispatch.len(), "Dispatching click");

        for (current_target, handlers) in dispatch {
            let event = ClickEvent {
                target,
                current_target,
                button,
            };
            for handler in handlers {
                handler(self, &event);
            }
        }
    }
}
