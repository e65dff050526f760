//! Controller configuration
//!
//! Every knob is a closed sum: a collection is discovered, fixed, or
//! computed; a style hook is the default class toggle or a callback; pane
//! lookup is positional or a callback. Resolution is an explicit match at
//! the point of use.

use std::fmt;
use std::sync::Arc;

use brute_dom::{Document, ElementId, Selection};

use crate::tab_ref::TabRef;
use crate::transition::TransitionSpec;

/// Base identifier used for generated class names and event namespaces.
pub const DEFAULT_BASE_NAME: &str = "brute-tabs";

/// Where a tab or pane collection comes from.
#[derive(Clone, Default)]
pub enum ElementSource {
    /// Children of the `<base>-buttons` / `<base>-panes` descendant of the
    /// container
    #[default]
    Discover,
    /// A fixed collection captured at configuration time
    Fixed(Selection),
    /// Computed against the document when the controller attaches
    Computed(Arc<dyn Fn(&Document, ElementId) -> Selection + Send + Sync>),
}

impl ElementSource {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Document, ElementId) -> Selection + Send + Sync + 'static,
    {
        ElementSource::Computed(Arc::new(f))
    }

    pub(crate) fn resolve(
        &self,
        doc: &Document,
        container: ElementId,
        wrapper_class: &str,
    ) -> Selection {
        match self {
            ElementSource::Discover => doc
                .find(container, wrapper_class)
                .first()
                .map(|wrapper| doc.children(wrapper))
                .unwrap_or_default(),
            ElementSource::Fixed(selection) => selection.clone(),
            ElementSource::Computed(resolver) => resolver(doc, container),
        }
    }
}

impl fmt::Debug for ElementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementSource::Discover => f.write_str("Discover"),
            ElementSource::Fixed(selection) => write!(f, "Fixed({} elements)", selection.len()),
            ElementSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Visual active-state hook applied to tab buttons.
#[derive(Clone, Default)]
pub enum StyleHook {
    /// Toggle the `<base>-active` class
    #[default]
    ActiveClass,
    Custom(Arc<dyn Fn(&mut Document, &Selection) + Send + Sync>),
}

impl StyleHook {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut Document, &Selection) + Send + Sync + 'static,
    {
        StyleHook::Custom(Arc::new(f))
    }
}

impl fmt::Debug for StyleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleHook::ActiveClass => f.write_str("ActiveClass"),
            StyleHook::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Maps a tab button to the pane it controls.
#[derive(Clone, Default)]
pub enum PaneLookup {
    /// Pane at the same ordinal position as the tab
    #[default]
    Positional,
    /// `(document, tabs, panes, tab) -> pane`
    Custom(Arc<dyn Fn(&Document, &Selection, &Selection, &Selection) -> Selection + Send + Sync>),
}

impl PaneLookup {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Document, &Selection, &Selection, &Selection) -> Selection + Send + Sync + 'static,
    {
        PaneLookup::Custom(Arc::new(f))
    }
}

impl fmt::Debug for PaneLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneLookup::Positional => f.write_str("Positional"),
            PaneLookup::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabsConfig {
    /// Prefix for generated class names and the click-event namespace
    pub base_name: String,
    pub tabs: ElementSource,
    pub panes: ElementSource,
    pub show_pane: TransitionSpec,
    pub hide_pane: TransitionSpec,
    /// Tab activated at attachment; `None` leaves every pane closed, which
    /// accordion-style layouts rely on
    pub initial_tab: Option<TabRef>,
    pub activate_tab: StyleHook,
    pub deactivate_tab: StyleHook,
    pub pane_for_tab: PaneLookup,
}

impl TabsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn with_tabs(mut self, tabs: ElementSource) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn with_panes(mut self, panes: ElementSource) -> Self {
        self.panes = panes;
        self
    }

    pub fn with_show_pane(mut self, spec: TransitionSpec) -> Self {
        self.show_pane = spec;
        self
    }

    pub fn with_hide_pane(mut self, spec: TransitionSpec) -> Self {
        self.hide_pane = spec;
        self
    }

    pub fn with_initial_tab(mut self, initial: Option<TabRef>) -> Self {
        self.initial_tab = initial;
        self
    }

    pub fn with_activate_tab(mut self, hook: StyleHook) -> Self {
        self.activate_tab = hook;
        self
    }

    pub fn with_deactivate_tab(mut self, hook: StyleHook) -> Self {
        self.deactivate_tab = hook;
        self
    }

    pub fn with_pane_for_tab(mut self, lookup: PaneLookup) -> Self {
        self.pane_for_tab = lookup;
        self
    }

    /// Class name for a generated element: `"<base>"` bare, or
    /// `"<base>-<suffix>"` for a sub-element.
    pub fn generate_class_name(&self, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) => format!("{}-{}", self.base_name, suffix),
            None => self.base_name.clone(),
        }
    }

    pub(crate) fn resolve_tabs(&self, doc: &Document, container: ElementId) -> Selection {
        self.tabs
            .resolve(doc, container, &self.generate_class_name(Some("buttons")))
    }

    pub(crate) fn resolve_panes(&self, doc: &Document, container: ElementId) -> Selection {
        self.panes
            .resolve(doc, container, &self.generate_class_name(Some("panes")))
    }

    pub(crate) fn pane_for_tab(
        &self,
        doc: &Document,
        tabs: &Selection,
        panes: &Selection,
        tab: &Selection,
    ) -> Selection {
        match &self.pane_for_tab {
            PaneLookup::Positional => tab
                .first()
                .and_then(|id| tabs.index_of(id))
                .map(|index| panes.eq(index))
                .unwrap_or_default(),
            PaneLookup::Custom(lookup) => lookup(doc, tabs, panes, tab),
        }
    }

    pub(crate) fn run_activate_hook(&self, doc: &mut Document, tab: &Selection) {
        match &self.activate_tab {
            StyleHook::ActiveClass => {
                let class = self.generate_class_name(Some("active"));
                for id in tab.iter() {
                    doc.add_class(id, &class);
                }
            }
            StyleHook::Custom(hook) => hook(doc, tab),
        }
    }

    pub(crate) fn run_deactivate_hook(&self, doc: &mut Document, tab: &Selection) {
        match &self.deactivate_tab {
            StyleHook::ActiveClass => {
                let class = self.generate_class_name(Some("active"));
                for id in tab.iter() {
                    doc.remove_class(id, &class);
                }
            }
            StyleHook::Custom(hook) => hook(doc, tab),
        }
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            tabs: ElementSource::default(),
            panes: ElementSource::default(),
            show_pane: TransitionSpec::default(),
            hide_pane: TransitionSpec::default(),
            initial_tab: Some(TabRef::Index(0)),
            activate_tab: StyleHook::default(),
            deactivate_tab: StyleHook::default(),
            pane_for_tab: PaneLookup::default(),
        }
    }
}
