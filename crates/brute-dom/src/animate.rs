//! Animation queue
//!
//! Animated show/hide effects are modeled as pending entries the host
//! drains by ticking the document. A finished animation applies its
//! terminal visibility and fires its completion exactly once; a stopped
//! animation fires nothing. This is the only source of asynchrony in the
//! crate, so widget transition sequencing is fully observable from tests.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::selection::Selection;

/// Built-in animated effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Fade,
    Slide,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Fade => "fade",
            Effect::Slide => "slide",
        }
    }

    /// Frames the effect occupies in the queue before completing.
    pub(crate) fn duration_ticks(&self) -> u32 {
        match self {
            Effect::Fade => 2,
            Effect::Slide => 3,
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fade" => Ok(Effect::Fade),
            "slide" => Ok(Effect::Slide),
            _ => Err(format!("Unknown effect: {}", s)),
        }
    }
}

/// Terminal visibility an animation drives its elements toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Show,
    Hide,
}

/// Continuation fired when an animation (or an instant transition standing
/// in for one) finishes.
pub type AnimationComplete = Box<dyn FnOnce(&mut Document) + Send>;

pub(crate) struct Animation {
    pub(crate) elements: Selection,
    pub(crate) direction: Direction,
    pub(crate) remaining: u32,
    pub(crate) on_complete: Option<AnimationComplete>,
}

impl Document {
    /// Enqueue an animated show/hide of `elements`.
    ///
    /// The completion fires when the animation finishes, even for an empty
    /// selection; only [`Document::stop`] discards it.
    pub fn animate(
        &mut self,
        elements: &Selection,
        effect: Effect,
        direction: Direction,
        on_complete: AnimationComplete,
    ) {
        tracing::debug!(
            effect = %effect,
            elements = elements.len(),
            "Enqueued animation"
        );

        self.animations.push(Animation {
            elements: elements.clone(),
            direction,
            remaining: effect.duration_ticks(),
            on_complete: Some(on_complete),
        });
    }

    /// Cancel pending animations touching any of `elements`.
    ///
    /// Cancelled completions are dropped, never fired.
    pub fn stop(&mut self, elements: &Selection) {
        let before = self.animations.len();
        self.animations
            .retain(|a| !a.elements.iter().any(|id| elements.contains(id)));

        let cancelled = before - self.animations.len();
        if cancelled > 0 {
            tracing::debug!(cancelled, "Stopped pending animations");
        }
    }

    /// Advance every pending animation one frame.
    ///
    /// Finished animations apply their terminal visibility and then fire
    /// their completions, which may enqueue follow-up animations; those run
    /// from the next tick.
    pub fn tick(&mut self) {
        for animation in &mut self.animations {
            animation.remaining = animation.remaining.saturating_sub(1);
        }

        let mut finished = Vec::new();
        let mut index = 0;
        while index < self.animations.len() {
            if self.animations[index].remaining == 0 {
                finished.push(self.animations.remove(index));
            } else {
                index += 1;
            }
        }

        for mut animation in finished {
            for id in animation.elements.iter() {
                match animation.direction {
                    Direction::Show => self.show(id),
                    Direction::Hide => self.hide(id),
                }
            }
            if let Some(on_complete) = animation.on_complete.take() {
                on_complete(self);
            }
        }
    }

    /// Tick until no animations remain pending.
    pub fn tick_until_idle(&mut self) {
        let mut guard = 0u32;
        while self.has_pending_animations() {
            self.tick();
            guard += 1;
            if guard > 1_000 {
                tracing::warn!("Animation queue did not drain; giving up");
                break;
            }
        }
    }

    pub fn has_pending_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn pending_animation_count(&self) -> usize {
        self.animations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_effect_string_round_trip() {
        assert_eq!("fade".parse::<Effect>().unwrap(), Effect::Fade);
        assert_eq!("Slide".parse::<Effect>().unwrap(), Effect::Slide);
        assert_eq!(Effect::Fade.to_string(), "fade");
        assert!("wobble".parse::<Effect>().is_err());
    }

    #[test]
    fn test_animation_completes_after_duration() {
        let mut doc = Document::new();
        let pane = doc.create_element(&["pane"]);
        doc.hide(pane);

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let sel = Selection::from(vec![pane]);
        doc.animate(
            &sel,
            Effect::Fade,
            Direction::Show,
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        // Not yet visible while the animation is in flight
        doc.tick();
        assert!(!doc.is_visible(pane));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        doc.tick();
        assert!(doc.is_visible(pane));
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Completion fires exactly once
        doc.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_drops_completion() {
        let mut doc = Document::new();
        let pane = doc.create_element(&["pane"]);

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let sel = Selection::from(vec![pane]);
        doc.animate(
            &sel,
            Effect::Slide,
            Direction::Hide,
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        doc.stop(&sel);
        doc.tick_until_idle();

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        // Terminal visibility never applied either
        assert!(doc.is_visible(pane));
    }

    #[test]
    fn test_empty_selection_still_completes() {
        let mut doc = Document::new();

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        doc.animate(
            &Selection::new(),
            Effect::Fade,
            Direction::Show,
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        doc.tick_until_idle();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_completion_may_enqueue_follow_up() {
        let mut doc = Document::new();
        let first = doc.create_element(&["pane"]);
        let second = doc.create_element(&["pane"]);
        doc.hide(second);

        let first_sel = Selection::from(vec![first]);
        let second_sel = Selection::from(vec![second]);
        doc.animate(
            &first_sel,
            Effect::Fade,
            Direction::Hide,
            Box::new(move |doc| {
                doc.animate(
                    &second_sel,
                    Effect::Fade,
                    Direction::Show,
                    Box::new(|_| {}),
                );
            }),
        );

        doc.tick_until_idle();
        assert!(!doc.is_visible(first));
        assert!(doc.is_visible(second));
    }

    #[test]
    fn test_tick_with_empty_queue() {
        let mut doc = Document::new();
        doc.tick();
        assert!(!doc.has_pending_animations());
    }
}
