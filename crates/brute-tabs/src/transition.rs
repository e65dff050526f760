//! Pane show/hide transitions
//!
//! Four behaviors hang off one configuration value: instant, built-in
//! animated effect, caller-supplied function, or a completing no-op. All
//! four honor the same contract: the completion fires exactly once,
//! synchronously or from the animation queue, so hide-then-show sequencing
//! can rely on it.

use std::fmt;
use std::sync::Arc;

use brute_dom::{AnimationComplete, Direction, Document, Effect, Selection};

/// Move-only completion token handed to a running transition.
///
/// Consuming the token is the only way to signal completion, so a
/// transition cannot complete twice. A token that is dropped without being
/// consumed stalls the activation sequence it belongs to.
pub struct Completion {
    continuation: AnimationComplete,
}

impl Completion {
    pub(crate) fn new(continuation: AnimationComplete) -> Self {
        Self { continuation }
    }

    /// Signal that the transition has finished.
    pub fn complete(self, doc: &mut Document) {
        (self.continuation)(doc);
    }

    pub(crate) fn into_inner(self) -> AnimationComplete {
        self.continuation
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Completion")
    }
}

/// Caller-supplied transition: `(document, elements, completion, is_initial)`.
pub type TransitionFn = dyn Fn(&mut Document, &Selection, Completion, bool) + Send + Sync;

/// How a pane is shown or hidden when the active tab changes.
#[derive(Clone, Default)]
pub enum TransitionSpec {
    /// Apply the terminal visibility immediately, completing synchronously
    #[default]
    Instant,
    /// Built-in animated effect driven by the document's animation queue
    Effect(Effect),
    /// Caller-supplied transition; must consume the completion token
    Custom(Arc<TransitionFn>),
    /// Leave visibility untouched but still complete
    NoOp,
}

impl TransitionSpec {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut Document, &Selection, Completion, bool) + Send + Sync + 'static,
    {
        TransitionSpec::Custom(Arc::new(f))
    }

    /// Apply the transition to `elements` in the given direction.
    ///
    /// Initial activations never animate: an `Effect` takes the instant
    /// path when `is_initial` is set. An animated run first stops any
    /// in-flight animation on the same elements.
    pub fn run(
        &self,
        doc: &mut Document,
        elements: &Selection,
        direction: Direction,
        is_initial: bool,
        completion: Completion,
    ) {
        match self {
            TransitionSpec::Instant => {
                apply_instant(doc, elements, direction);
                completion.complete(doc);
            }
            TransitionSpec::Effect(effect) => {
                if is_initial {
                    apply_instant(doc, elements, direction);
                    completion.complete(doc);
                } else {
                    doc.stop(elements);
                    doc.animate(elements, *effect, direction, completion.into_inner());
                }
            }
            TransitionSpec::Custom(transition) => {
                transition(doc, elements, completion, is_initial);
            }
            TransitionSpec::NoOp => completion.complete(doc),
        }
    }
}

impl fmt::Debug for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionSpec::Instant => f.write_str("Instant"),
            TransitionSpec::Effect(effect) => write!(f, "Effect({})", effect),
            TransitionSpec::Custom(_) => f.write_str("Custom(..)"),
            TransitionSpec::NoOp => f.write_str("NoOp"),
        }
    }
}

fn apply_instant(doc: &mut Document, elements: &Selection, direction: Direction) {
    for id in elements.iter() {
        match direction {
            Direction::Show => doc.show(id),
            Direction::Hide => doc.hide(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn pane_fixture() -> (Document, Selection) {
        let mut doc = Document::new();
        let pane = doc.create_element(&["pane"]);
        doc.hide(pane);
        (doc, Selection::from(vec![pane]))
    }

    fn counting_completion(counter: &Arc<AtomicUsize>) -> Completion {
        let counter = Arc::clone(counter);
        Completion::new(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
    }

    #[test]
    fn test_instant_shows_and_completes_synchronously() {
        let (mut doc, pane) = pane_fixture();
        let fired = Arc::new(AtomicUsize::new(0));

        TransitionSpec::Instant.run(
            &mut doc,
            &pane,
            Direction::Show,
            false,
            counting_completion(&fired),
        );

        assert!(doc.is_visible(pane.first().unwrap()));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!doc.has_pending_animations());
    }

    #[test]
    fn test_noop_completes_without_touching_visibility() {
        let (mut doc, pane) = pane_fixture();
        let fired = Arc::new(AtomicUsize::new(0));

        TransitionSpec::NoOp.run(
            &mut doc,
            &pane,
            Direction::Show,
            false,
            counting_completion(&fired),
        );

        assert!(!doc.is_visible(pane.first().unwrap()));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_effect_defers_to_animation_queue() {
        let (mut doc, pane) = pane_fixture();
        let fired = Arc::new(AtomicUsize::new(0));

        TransitionSpec::Effect(Effect::Fade).run(
            &mut doc,
            &pane,
            Direction::Show,
            false,
            counting_completion(&fired),
        );

        // Deferred: nothing visible, nothing fired yet
        assert!(!doc.is_visible(pane.first().unwrap()));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        doc.tick_until_idle();
        assert!(doc.is_visible(pane.first().unwrap()));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_effect_is_instant_on_initial_activation() {
        let (mut doc, pane) = pane_fixture();
        let fired = Arc::new(AtomicUsize::new(0));

        TransitionSpec::Effect(Effect::Slide).run(
            &mut doc,
            &pane,
            Direction::Show,
            true,
            counting_completion(&fired),
        );

        assert!(doc.is_visible(pane.first().unwrap()));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!doc.has_pending_animations());
    }

    #[test]
    fn test_custom_receives_initial_flag_and_token() {
        let (mut doc, pane) = pane_fixture();
        let saw_initial = Arc::new(AtomicBool::new(false));
        let fired = Arc::new(AtomicUsize::new(0));

        let observed = Arc::clone(&saw_initial);
        let spec = TransitionSpec::custom(move |doc, elements, completion, is_initial| {
            observed.store(is_initial, Ordering::SeqCst);
            for id in elements.iter() {
                doc.show(id);
            }
            completion.complete(doc);
        });

        spec.run(
            &mut doc,
            &pane,
            Direction::Show,
            true,
            counting_completion(&fired),
        );

        assert!(saw_initial.load(Ordering::SeqCst));
        assert!(doc.is_visible(pane.first().unwrap()));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_target_still_completes() {
        let mut doc = Document::new();
        let fired = Arc::new(AtomicUsize::new(0));

        TransitionSpec::Instant.run(
            &mut doc,
            &Selection::new(),
            Direction::Hide,
            false,
            counting_completion(&fired),
        );

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
