//! Document arena
//!
//! Owns every element plus the event bindings and pending animations that
//! refer to them. Mutation goes through `&mut Document`, so widget code is
//! single-threaded and event-driven with no locking discipline of its own.

use std::collections::HashMap;

use crate::animate::Animation;
use crate::element::{Element, ElementId};
use crate::error::DomError;
use crate::events::Binding;
use crate::selection::Selection;
use crate::Result;

#[derive(Default)]
pub struct Document {
    pub(crate) elements: HashMap<ElementId, Element>,
    pub(crate) bindings: HashMap<ElementId, Vec<Binding>>,
    pub(crate) animations: Vec<Animation>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element carrying the given classes.
    pub fn create_element(&mut self, classes: &[&str]) -> ElementId {
        let element = Element::new(classes);
        let id = element.id();
        self.elements.insert(id, element);
        id
    }

    /// Append `child` to `parent`, reparenting it if necessary.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        if !self.elements.contains_key(&parent) {
            return Err(DomError::NotFound(parent));
        }
        if !self.elements.contains_key(&child) {
            return Err(DomError::NotFound(child));
        }

        if let Some(old_parent) = self.elements[&child].parent() {
            if let Some(node) = self.elements.get_mut(&old_parent) {
                node.remove_child(child);
            }
        }

        if let Some(node) = self.elements.get_mut(&child) {
            node.set_parent(Some(parent));
        }
        if let Some(node) = self.elements.get_mut(&parent) {
            node.push_child(child);
        }

        Ok(())
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(&id).and_then(Element::parent)
    }

    /// Direct children of `id`, in insertion order.
    pub fn children(&self, id: ElementId) -> Selection {
        self.elements
            .get(&id)
            .map(|node| node.children().iter().copied().collect())
            .unwrap_or_default()
    }

    /// Descendants of `root` carrying `class`, in document order.
    ///
    /// `root` itself is never part of the result. An unknown root yields an
    /// empty selection.
    pub fn find(&self, root: ElementId, class: &str) -> Selection {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self
            .elements
            .get(&root)
            .map(|node| node.children().iter().rev().copied().collect())
            .unwrap_or_default();

        while let Some(id) = stack.pop() {
            if let Some(node) = self.elements.get(&id) {
                if node.has_class(class) {
                    found.push(id);
                }
                stack.extend(node.children().iter().rev().copied());
            }
        }

        Selection::from(found)
    }

    // === Class manipulation ===

    /// Class ops on unknown ids are silent no-ops, matching the empty
    /// selection philosophy of the query API.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.elements.get_mut(&id) {
            node.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.elements.get_mut(&id) {
            node.remove_class(class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements
            .get(&id)
            .map(|node| node.has_class(class))
            .unwrap_or(false)
    }

    // === Visibility ===

    pub fn show(&mut self, id: ElementId) {
        if let Some(node) = self.elements.get_mut(&id) {
            node.set_visible(true);
        }
    }

    pub fn hide(&mut self, id: ElementId) {
        if let Some(node) = self.elements.get_mut(&id) {
            node.set_visible(false);
        }
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.elements
            .get(&id)
            .map(Element::is_visible)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_child_and_children_order() {
        let mut doc = Document::new();
        let parent = doc.create_element(&["wrap"]);
        let a = doc.create_element(&["item"]);
        let b = doc.create_element(&["item"]);

        doc.append_child(parent, a).unwrap();
        doc.append_child(parent, b).unwrap();

        assert_eq!(doc.children(parent).ids(), &[a, b]);
        assert_eq!(doc.parent(a), Some(parent));
    }

    #[test]
    fn test_append_child_reparents() {
        let mut doc = Document::new();
        let first = doc.create_element(&[]);
        let second = doc.create_element(&[]);
        let child = doc.create_element(&[]);

        doc.append_child(first, child).unwrap();
        doc.append_child(second, child).unwrap();

        assert!(doc.children(first).is_empty());
        assert_eq!(doc.children(second).ids(), &[child]);
        assert_eq!(doc.parent(child), Some(second));
    }

    #[test]
    fn test_append_child_unknown_element() {
        let mut doc = Document::new();
        let parent = doc.create_element(&[]);

        let mut other = Document::new();
        let stranger = other.create_element(&[]);

        assert!(doc.append_child(parent, stranger).is_err());
        assert!(doc.append_child(stranger, parent).is_err());
    }

    #[test]
    fn test_find_descendants_in_document_order() {
        let mut doc = Document::new();
        let root = doc.create_element(&[]);
        let wrap = doc.create_element(&["wrap"]);
        let a = doc.create_element(&["pane"]);
        let b = doc.create_element(&["pane"]);
        let deep = doc.create_element(&["pane"]);

        doc.append_child(root, wrap).unwrap();
        doc.append_child(wrap, a).unwrap();
        doc.append_child(wrap, b).unwrap();
        doc.append_child(b, deep).unwrap();

        assert_eq!(doc.find(root, "pane").ids(), &[a, b, deep]);
        // The root itself never matches
        assert_eq!(doc.find(root, "wrap").ids(), &[wrap]);
        assert!(doc.find(a, "pane").is_empty());
    }

    #[test]
    fn test_find_unknown_root_is_empty() {
        let doc = Document::new();
        let mut other = Document::new();
        let stranger = other.create_element(&[]);
        assert!(doc.find(stranger, "pane").is_empty());
    }

    #[test]
    fn test_class_ops() {
        let mut doc = Document::new();
        let id = doc.create_element(&["tab"]);

        doc.add_class(id, "active");
        assert!(doc.has_class(id, "active"));

        doc.remove_class(id, "active");
        assert!(!doc.has_class(id, "active"));
    }

    #[test]
    fn test_visibility() {
        let mut doc = Document::new();
        let id = doc.create_element(&[]);
        assert!(doc.is_visible(id));

        doc.hide(id);
        assert!(!doc.is_visible(id));

        doc.show(id);
        assert!(doc.is_visible(id));
    }

    #[test]
    fn test_ops_on_unknown_ids_are_noops() {
        let mut doc = Document::new();
        let mut other = Document::new();
        let stranger = other.create_element(&[]);

        doc.add_class(stranger, "active");
        doc.show(stranger);
        assert!(!doc.has_class(stranger, "active"));
        assert!(!doc.is_visible(stranger));
    }
}
