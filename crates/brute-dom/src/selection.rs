//! Ordered element collections

use crate::document::Document;
use crate::element::ElementId;

/// An ordered collection of element ids.
///
/// Narrowing operations never fail: an index past the end or a filter that
/// matches nothing yields an empty selection, so callers can chain lookups
/// without guarding every step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding the single element at `index`, or empty when the
    /// index is out of range.
    pub fn eq(&self, index: usize) -> Selection {
        Selection {
            ids: self.ids.get(index).copied().into_iter().collect(),
        }
    }

    /// Keep only elements carrying `class`.
    pub fn filter_class(&self, doc: &Document, class: &str) -> Selection {
        Selection {
            ids: self
                .ids
                .iter()
                .copied()
                .filter(|id| doc.has_class(*id, class))
                .collect(),
        }
    }

    /// Keep only the given element, preserving emptiness when it is absent.
    pub fn filter_id(&self, id: ElementId) -> Selection {
        Selection {
            ids: self.ids.iter().copied().filter(|i| *i == id).collect(),
        }
    }

    /// Position of `id` within this selection.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.ids.iter().position(|i| *i == id)
    }

    pub fn first(&self) -> Option<ElementId> {
        self.ids.first().copied()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.ids.iter().copied()
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }
}

impl From<Vec<ElementId>> for Selection {
    fn from(ids: Vec<ElementId>) -> Self {
        Self { ids }
    }
}

impl FromIterator<ElementId> for Selection {
    fn from_iter<T: IntoIterator<Item = ElementId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
