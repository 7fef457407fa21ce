// Scroll reveal engine: one-shot visibility triggers for marked elements.
//
// The engine is generic over the element handle so it can run against real
// DOM elements in the browser and plain values in host-side tests.

use super::constants::{
    COUNTER_THRESHOLD, GROUP_CASCADE_CYCLE, GROUP_CASCADE_STEP_MS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, STAGGER_CHILD_STEP_MS,
};

/// How an observed element animates in when it is first seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimateMode {
    #[default]
    None,
    /// Direct children are revealed one after another.
    Stagger,
}

impl AnimateMode {
    /// Interpret a `data-animate` attribute value.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("stagger") => AnimateMode::Stagger,
            _ => AnimateMode::None,
        }
    }
}

/// Which observer a watch belongs to. Reveals and counters use different
/// visibility thresholds, so an element may be watched once per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchKind {
    Reveal,
    Counter,
}

/// Parameters handed to the observation source when a watch is registered.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub kind: WatchKind,
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub fn reveal() -> Self {
        Self {
            kind: WatchKind::Reveal,
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }

    pub fn counter() -> Self {
        Self {
            kind: WatchKind::Counter,
            threshold: COUNTER_THRESHOLD,
            root_margin: "0px",
        }
    }

    pub fn for_kind(kind: WatchKind) -> Self {
        match kind {
            WatchKind::Reveal => Self::reveal(),
            WatchKind::Counter => Self::counter(),
        }
    }
}

/// Host capability that reports when registered elements enter the viewport.
///
/// In the browser this is an `IntersectionObserver` per [`WatchKind`]; entries
/// come back asynchronously and are fed to [`RevealEngine::handle_batch`].
pub trait ObservationSource<E> {
    fn observe(&mut self, element: &E, options: &ObserverOptions);
    fn unobserve(&mut self, element: &E, kind: WatchKind);
}

/// One notification from the observation source.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
    /// Direct children of `target` when the notification was delivered.
    pub child_count: usize,
}

impl<E> IntersectionEntry<E> {
    pub fn new(target: E, is_intersecting: bool, child_count: usize) -> Self {
        Self {
            target,
            is_intersecting,
            child_count,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Pending,
    Triggered,
    /// Dropped before it ever triggered (element left the document).
    Discarded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    /// The observed element itself.
    Element,
    /// Direct child at this index, counted at trigger time.
    Child(usize),
}

/// Side effect the web layer must carry out after a trigger.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealEffect<E> {
    /// Add the reveal class to `target` after `delay_ms`.
    AddVisible {
        element: E,
        target: RevealTarget,
        delay_ms: u32,
    },
    /// Begin tweening the element's text from 0 to `target`.
    StartCounter { element: E, target: u32 },
}

#[derive(Clone, Copy, Debug)]
enum Payload {
    Reveal { mode: AnimateMode, delay_ms: u32 },
    Counter { target: u32 },
}

impl Payload {
    fn kind(&self) -> WatchKind {
        match self {
            Payload::Reveal { .. } => WatchKind::Reveal,
            Payload::Counter { .. } => WatchKind::Counter,
        }
    }
}

#[derive(Clone, Debug)]
struct Watch<E> {
    element: E,
    payload: Payload,
}

impl<E: PartialEq> Watch<E> {
    fn matches(&self, element: &E, kind: WatchKind) -> bool {
        &self.element == element && self.payload.kind() == kind
    }
}

/// Tracks watched elements and turns first intersections into effects.
///
/// Only pending watches are scanned per entry; a watch moves to `settled`
/// the moment it triggers or is discarded and is never looked at again by
/// [`RevealEngine::handle_batch`].
pub struct RevealEngine<E, S> {
    source: S,
    pending: Vec<Watch<E>>,
    settled: Vec<(E, WatchKind, WatchState)>,
}

impl<E, S> RevealEngine<E, S>
where
    E: Clone + PartialEq,
    S: ObservationSource<E>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: Vec::new(),
            settled: Vec::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start observing an element for a one-shot reveal.
    pub fn watch_reveal(&mut self, element: E, mode: AnimateMode, delay_ms: u32) {
        self.register(element, Payload::Reveal { mode, delay_ms });
    }

    /// Start observing a counter element that tweens towards `target`.
    pub fn watch_counter(&mut self, element: E, target: u32) {
        self.register(element, Payload::Counter { target });
    }

    fn register(&mut self, element: E, payload: Payload) {
        let kind = payload.kind();
        if self.state_of(&element, kind).is_some() {
            log::debug!("[reveal] element already watched as {:?}", kind);
            return;
        }
        self.source
            .observe(&element, &ObserverOptions::for_kind(kind));
        self.pending.push(Watch { element, payload });
    }

    fn settle(&mut self, index: usize, state: WatchState) -> Watch<E> {
        let watch = self.pending.remove(index);
        let kind = watch.payload.kind();
        self.source.unobserve(&watch.element, kind);
        self.settled.push((watch.element.clone(), kind, state));
        watch
    }

    /// Process one batch of notifications from the observer of `kind`, in
    /// delivery order. Each pending watch fires at most once; later entries
    /// for triggered, discarded or unknown elements are ignored.
    pub fn handle_batch(
        &mut self,
        kind: WatchKind,
        batch: &[IntersectionEntry<E>],
    ) -> Vec<RevealEffect<E>> {
        let mut effects = Vec::new();
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            let Some(index) = self
                .pending
                .iter()
                .position(|w| w.matches(&entry.target, kind))
            else {
                continue;
            };
            let watch = self.settle(index, WatchState::Triggered);
            trigger_effects(&watch, entry.child_count, &mut effects);
        }
        effects
    }

    /// Drop every pending watch on `element`. Safe to call repeatedly and for
    /// elements that already triggered or were never watched.
    pub fn discard(&mut self, element: &E) {
        while let Some(index) = self.pending.iter().position(|w| &w.element == element) {
            self.settle(index, WatchState::Discarded);
        }
    }

    pub fn state_of(&self, element: &E, kind: WatchKind) -> Option<WatchState> {
        if self.pending.iter().any(|w| w.matches(element, kind)) {
            return Some(WatchState::Pending);
        }
        self.settled
            .iter()
            .find(|(el, k, _)| el == element && *k == kind)
            .map(|(_, _, state)| *state)
    }

    pub fn is_revealed(&self, element: &E) -> bool {
        self.state_of(element, WatchKind::Reveal) == Some(WatchState::Triggered)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn trigger_effects<E: Clone>(
    watch: &Watch<E>,
    child_count: usize,
    effects: &mut Vec<RevealEffect<E>>,
) {
    match watch.payload {
        Payload::Reveal { mode, delay_ms } => {
            if mode == AnimateMode::Stagger {
                effects.extend(stagger_delays(child_count).enumerate().map(|(i, delay)| {
                    RevealEffect::AddVisible {
                        element: watch.element.clone(),
                        target: RevealTarget::Child(i),
                        delay_ms: delay,
                    }
                }));
            }
            effects.push(RevealEffect::AddVisible {
                element: watch.element.clone(),
                target: RevealTarget::Element,
                delay_ms,
            });
        }
        Payload::Counter { target } => effects.push(RevealEffect::StartCounter {
            element: watch.element.clone(),
            target,
        }),
    }
}

/// Delay of each child in a stagger group, relative to the trigger.
pub fn stagger_delays(child_count: usize) -> impl Iterator<Item = u32> {
    (0..child_count).map(|i| i as u32 * STAGGER_CHILD_STEP_MS)
}

/// Reveal delay for the observable at `position` in document order.
///
/// Members of a cascading group (services list, gallery) get a delay that
/// cycles every [`GROUP_CASCADE_CYCLE`] items; the cascade replaces any
/// declared delay. Everything else uses its declared delay or 0.
pub fn reveal_delay_ms(position: usize, in_cascade_group: bool, declared: Option<u32>) -> u32 {
    if in_cascade_group {
        (position % GROUP_CASCADE_CYCLE) as u32 * GROUP_CASCADE_STEP_MS
    } else {
        declared.unwrap_or(0)
    }
}

/// Parse a `data-delay` value in milliseconds.
pub fn parse_delay_ms(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse::<u32>().ok())
}
