//! Tab controller
//!
//! One instance per container: resolves the tab and pane collections, binds
//! a namespaced click handler to each tab button, tracks the active
//! tab/pane pair, and sequences the hide-then-show pane transitions.

use std::sync::Arc;

use parking_lot::Mutex;

use brute_dom::{AnimationComplete, Direction, Document, ElementId, MouseButton, Selection};

use crate::config::TabsConfig;
use crate::tab_ref::TabRef;
use crate::transition::{Completion, TransitionSpec};

struct ControllerState {
    container: ElementId,
    config: TabsConfig,
    /// Resolved once at attachment
    tabs: Selection,
    panes: Selection,
    /// `None` until the first activation. May hold an empty selection when
    /// an activation resolved nothing; later activations still take the
    /// switch path then.
    active_tab: Option<Selection>,
    active_pane: Option<Selection>,
    /// Bumped on every activation; in-flight continuations carrying an
    /// older value are dropped
    epoch: u64,
}

/// Everything a single activation needs once the lock is released.
struct Activation {
    epoch: u64,
    target: Selection,
    pane: Selection,
    previous_tab: Option<Selection>,
    previous_pane: Option<Selection>,
    first: bool,
    show: TransitionSpec,
    hide: TransitionSpec,
    config: TabsConfig,
}

pub struct TabController {
    inner: Arc<Mutex<ControllerState>>,
}

impl TabController {
    /// Attach a controller to `container`.
    ///
    /// Resolves the tab/pane collections, binds one click handler per tab
    /// button under the base-name namespace, and activates the configured
    /// initial tab without animation. With `initial_tab: None` nothing is
    /// activated and no pane is shown.
    pub fn new(doc: &mut Document, container: ElementId, config: TabsConfig) -> Self {
        let tabs = config.resolve_tabs(doc, container);
        let panes = config.resolve_panes(doc, container);
        let initial_tab = config.initial_tab.clone();

        tracing::debug!(
            container = %container,
            base_name = %config.base_name,
            tabs = tabs.len(),
            panes = panes.len(),
            "Attaching tab controller"
        );

        let controller = Self {
            inner: Arc::new(Mutex::new(ControllerState {
                container,
                config,
                tabs,
                panes,
                active_tab: None,
                active_pane: None,
                epoch: 0,
            })),
        };

        controller.bind_events(doc);

        if let Some(tab) = initial_tab {
            controller.activate(doc, tab, None);
        }

        controller
    }

    /// Switch the active tab.
    ///
    /// The target tab's visual active state is applied synchronously,
    /// before any pane transition completes: the user gets immediate
    /// feedback on the buttons even while pane content is still animating.
    /// The pane sequence is hide-current, then show-target, then
    /// `on_complete`.
    ///
    /// Activating while a previous activation's transition is still in
    /// flight supersedes it: the stale continuation is dropped, its show
    /// never runs and its completion callback never fires.
    ///
    /// A target that resolves to nothing (out-of-range index, dead class
    /// filter) is not an error; hooks and transitions run against the empty
    /// selection and completions still fire.
    pub fn activate(
        &self,
        doc: &mut Document,
        tab: impl Into<TabRef>,
        on_complete: Option<AnimationComplete>,
    ) {
        let tab_ref = tab.into();

        let activation = {
            let mut state = self.inner.lock();
            state.epoch += 1;

            let target = tab_ref.resolve(doc, &state.tabs);
            let pane = state
                .config
                .pane_for_tab(doc, &state.tabs, &state.panes, &target);
            let previous_tab = state.active_tab.replace(target.clone());
            let previous_pane = state.active_pane.clone();
            let first = previous_tab.is_none();
            if first {
                state.active_pane = Some(pane.clone());
            }

            Activation {
                epoch: state.epoch,
                target,
                pane,
                previous_tab,
                previous_pane,
                first,
                show: state.config.show_pane.clone(),
                hide: state.config.hide_pane.clone(),
                config: state.config.clone(),
            }
        };

        tracing::debug!(
            base_name = %activation.config.base_name,
            first = activation.first,
            resolved = !activation.target.is_empty(),
            "Activating tab"
        );

        // Button feedback first, before any transition runs
        if let Some(previous) = &activation.previous_tab {
            activation.config.run_deactivate_hook(doc, previous);
        }
        activation.config.run_activate_hook(doc, &activation.target);

        let on_complete: AnimationComplete =
            on_complete.unwrap_or_else(|| Box::new(|_: &mut Document| {}));

        if activation.first {
            activation.show.run(
                doc,
                &activation.pane,
                Direction::Show,
                true,
                Completion::new(on_complete),
            );
            return;
        }

        let inner = Arc::clone(&self.inner);
        let show = activation.show;
        let pane = activation.pane;
        let epoch = activation.epoch;
        let continuation: AnimationComplete = Box::new(move |doc: &mut Document| {
            {
                let mut state = inner.lock();
                if state.epoch != epoch {
                    tracing::debug!("Dropping superseded activation");
                    return;
                }
                state.active_pane = Some(pane.clone());
            }
            show.run(doc, &pane, Direction::Show, false, Completion::new(on_complete));
        });

        let previous_pane = activation.previous_pane.unwrap_or_default();
        activation.hide.run(
            doc,
            &previous_pane,
            Direction::Hide,
            false,
            Completion::new(continuation),
        );
    }

    /// Unbind this instance's click handlers.
    ///
    /// Only the controller's own namespace is removed; element structure,
    /// classes and pane visibility are left exactly as they are.
    pub fn destroy(&self, doc: &mut Document) {
        let (namespace, tabs) = {
            let state = self.inner.lock();
            (state.config.base_name.clone(), state.tabs.clone())
        };

        for tab in tabs.iter() {
            doc.off_click(tab, &namespace);
        }

        tracing::debug!(namespace = %namespace, "Destroyed tab controller");
    }

    fn bind_events(&self, doc: &mut Document) {
        let (namespace, tabs) = {
            let state = self.inner.lock();
            (state.config.base_name.clone(), state.tabs.clone())
        };

        for tab in tabs.iter() {
            let controller = self.clone();
            doc.on_click(tab, &namespace, move |doc, event| {
                // Primary button only
                if event.button == MouseButton::Primary {
                    controller.activate(doc, TabRef::Element(event.current_target), None);
                }
            });
        }
    }

    pub fn container(&self) -> ElementId {
        self.inner.lock().container
    }

    pub fn base_name(&self) -> String {
        self.inner.lock().config.base_name.clone()
    }

    pub fn generate_class_name(&self, suffix: Option<&str>) -> String {
        self.inner.lock().config.generate_class_name(suffix)
    }

    pub fn tabs(&self) -> Selection {
        self.inner.lock().tabs.clone()
    }

    pub fn panes(&self) -> Selection {
        self.inner.lock().panes.clone()
    }

    /// `None` before the first activation.
    pub fn active_tab(&self) -> Option<Selection> {
        self.inner.lock().active_tab.clone()
    }

    pub fn active_pane(&self) -> Option<Selection> {
        self.inner.lock().active_pane.clone()
    }

    /// Whether two handles drive the same underlying controller.
    pub fn same_instance(&self, other: &TabController) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Clone for TabController {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
