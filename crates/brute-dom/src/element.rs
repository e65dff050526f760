//! Element node storage

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity for an element within a [`Document`](crate::Document).
///
/// Ids stay valid for the lifetime of the document and are usable as map
/// keys by callers that keep side tables about elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single node in the element tree.
#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    classes: Vec<String>,
    visible: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    pub(crate) fn new(classes: &[&str]) -> Self {
        let mut seen = Vec::new();
        for class in classes {
            if !seen.iter().any(|c: &String| c == class) {
                seen.push((*class).to_string());
            }
        }

        Self {
            id: ElementId::new(),
            classes: seen,
            // Elements start visible; stylesheet-like initial hiding is the
            // caller's responsibility
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ElementId>) {
        self.parent = parent;
    }

    pub(crate) fn push_child(&mut self, child: ElementId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    pub(crate) fn remove_child(&mut self, child: ElementId) {
        self.children.retain(|c| *c != child);
    }
}
