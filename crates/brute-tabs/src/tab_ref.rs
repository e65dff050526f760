//! Tab identifier normalization
//!
//! A "which tab" argument may arrive as an ordinal, a concrete element, or
//! a class filter; all three narrow the tab collection the same way.

use brute_dom::{Document, ElementId, Selection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabRef {
    /// Zero-based position within the tab collection
    Index(usize),
    /// A concrete tab button element
    Element(ElementId),
    /// Class-name filter against the tab collection
    Class(String),
}

impl TabRef {
    /// Narrow `collection` down to the referenced tab.
    ///
    /// An out-of-range index or a filter that matches nothing yields an
    /// empty selection rather than an error; downstream transitions operate
    /// on the empty target and still complete.
    pub fn resolve(&self, doc: &Document, collection: &Selection) -> Selection {
        match self {
            TabRef::Index(index) => collection.eq(*index),
            TabRef::Element(id) => collection.filter_id(*id),
            TabRef::Class(class) => collection.filter_class(doc, class),
        }
    }
}

impl From<usize> for TabRef {
    fn from(index: usize) -> Self {
        TabRef::Index(index)
    }
}

impl From<ElementId> for TabRef {
    fn from(id: ElementId) -> Self {
        TabRef::Element(id)
    }
}

impl From<&str> for TabRef {
    fn from(class: &str) -> Self {
        TabRef::Class(class.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Document, Selection) {
        let mut doc = Document::new();
        let a = doc.create_element(&["tab", "tab-general"]);
        let b = doc.create_element(&["tab", "tab-details"]);
        (doc, Selection::from(vec![a, b]))
    }

    #[test]
    fn test_resolve_by_index() {
        let (doc, tabs) = fixture();
        let resolved = TabRef::from(1).resolve(&doc, &tabs);
        assert_eq!(resolved.first(), Some(tabs.ids()[1]));
    }

    #[test]
    fn test_resolve_out_of_range_is_empty() {
        let (doc, tabs) = fixture();
        assert!(TabRef::from(7).resolve(&doc, &tabs).is_empty());
    }

    #[test]
    fn test_resolve_by_element() {
        let (doc, tabs) = fixture();
        let target = tabs.ids()[0];
        let resolved = TabRef::from(target).resolve(&doc, &tabs);
        assert_eq!(resolved.first(), Some(target));
    }

    #[test]
    fn test_resolve_by_class() {
        let (doc, tabs) = fixture();
        let resolved = TabRef::from("tab-details").resolve(&doc, &tabs);
        assert_eq!(resolved.first(), Some(tabs.ids()[1]));
        assert!(TabRef::from("tab-missing").resolve(&doc, &tabs).is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&TabRef::Index(2)).unwrap();
        assert_eq!(serde_json::from_str::<TabRef>(&json).unwrap(), TabRef::Index(2));

        let parsed: TabRef = serde_json::from_str(r#"{"class":"tab-details"}"#).unwrap();
        assert_eq!(parsed, TabRef::Class("tab-details".to_string()));
    }
}
