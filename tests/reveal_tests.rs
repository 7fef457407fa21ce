// Host-side tests for the reveal engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use crate::core::reveal::*;

// Records every observe/unobserve call instead of watching a viewport.
#[derive(Default)]
struct FakeSource {
    observed: Vec<(&'static str, ObserverOptions)>,
    unobserved: Vec<(&'static str, WatchKind)>,
}

impl ObservationSource<&'static str> for FakeSource {
    fn observe(&mut self, element: &&'static str, options: &ObserverOptions) {
        self.observed.push((*element, options.clone()));
    }

    fn unobserve(&mut self, element: &&'static str, kind: WatchKind) {
        self.unobserved.push((*element, kind));
    }
}

fn engine() -> RevealEngine<&'static str, FakeSource> {
    RevealEngine::new(FakeSource::default())
}

fn hit(target: &'static str) -> IntersectionEntry<&'static str> {
    IntersectionEntry::new(target, true, 0)
}

fn hit_with_children(target: &'static str, child_count: usize) -> IntersectionEntry<&'static str> {
    IntersectionEntry::new(target, true, child_count)
}

fn miss(target: &'static str) -> IntersectionEntry<&'static str> {
    IntersectionEntry::new(target, false, 0)
}

fn child_schedule(effects: &[RevealEffect<&'static str>]) -> Vec<(RevealTarget, u32)> {
    effects
        .iter()
        .map(|fx| match fx {
            RevealEffect::AddVisible {
                target, delay_ms, ..
            } => (*target, *delay_ms),
            other => panic!("unexpected effect {:?}", other),
        })
        .collect()
}

#[test]
fn registration_observes_with_kind_specific_options() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 0);
    e.watch_counter("stat", 120);

    let observed = &e.source().observed;
    assert_eq!(observed.len(), 2);
    assert_eq!(observed[0].0, "card");
    assert_eq!(observed[0].1.threshold, 0.12);
    assert_eq!(observed[0].1.root_margin, "0px 0px -30px 0px");
    assert_eq!(observed[1].0, "stat");
    assert_eq!(observed[1].1.threshold, 0.5);
    assert_eq!(observed[1].1.kind, WatchKind::Counter);
}

#[test]
fn first_intersection_reveals_and_stops_observing() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 0);
    assert!(!e.is_revealed(&"card"));

    let effects = e.handle_batch(WatchKind::Reveal, &[hit("card")]);
    assert_eq!(
        effects,
        vec![RevealEffect::AddVisible {
            element: "card",
            target: RevealTarget::Element,
            delay_ms: 0,
        }]
    );
    assert!(e.is_revealed(&"card"));
    assert_eq!(e.source().unobserved, vec![("card", WatchKind::Reveal)]);
    assert_eq!(e.pending_count(), 0);
}

#[test]
fn repeated_intersections_never_retrigger() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 0);

    let first = e.handle_batch(WatchKind::Reveal, &[hit("card"), hit("card")]);
    assert_eq!(first.len(), 1);
    let later = e.handle_batch(WatchKind::Reveal, &[hit("card")]);
    assert!(later.is_empty());
    assert_eq!(e.source().unobserved.len(), 1);
    assert_eq!(e.state_of(&"card", WatchKind::Reveal), Some(WatchState::Triggered));
}

#[test]
fn non_intersecting_entries_leave_watch_pending() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 0);

    let effects = e.handle_batch(WatchKind::Reveal, &[miss("card")]);
    assert!(effects.is_empty());
    assert_eq!(e.state_of(&"card", WatchKind::Reveal), Some(WatchState::Pending));
}

#[test]
fn stagger_children_cascade_by_120ms() {
    let mut e = engine();
    e.watch_reveal("list", AnimateMode::Stagger, 0);

    let effects = e.handle_batch(WatchKind::Reveal, &[hit_with_children("list", 3)]);
    assert_eq!(
        child_schedule(&effects),
        vec![
            (RevealTarget::Child(0), 0),
            (RevealTarget::Child(1), 120),
            (RevealTarget::Child(2), 240),
            (RevealTarget::Element, 0),
        ]
    );
}

#[test]
fn stagger_counts_children_present_at_trigger() {
    // Registered while the section had three children; a decorative line was
    // prepended before it scrolled into view.
    let mut e = engine();
    e.watch_reveal("section", AnimateMode::Stagger, 0);

    let effects = e.handle_batch(WatchKind::Reveal, &[hit_with_children("section", 4)]);
    assert_eq!(
        child_schedule(&effects),
        vec![
            (RevealTarget::Child(0), 0),
            (RevealTarget::Child(1), 120),
            (RevealTarget::Child(2), 240),
            (RevealTarget::Child(3), 360),
            (RevealTarget::Element, 0),
        ]
    );
}

#[test]
fn child_count_is_ignored_without_stagger() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 40);

    let effects = e.handle_batch(WatchKind::Reveal, &[hit_with_children("card", 5)]);
    assert_eq!(child_schedule(&effects), vec![(RevealTarget::Element, 40)]);
}

#[test]
fn element_delay_is_kept_on_trigger() {
    let mut e = engine();
    e.watch_reveal("service", AnimateMode::None, 160);

    let effects = e.handle_batch(WatchKind::Reveal, &[hit_with_children("service", 4)]);
    assert_eq!(
        effects,
        vec![RevealEffect::AddVisible {
            element: "service",
            target: RevealTarget::Element,
            delay_ms: 160,
        }]
    );
}

#[test]
fn counter_trigger_starts_tween_once() {
    let mut e = engine();
    e.watch_counter("years", 25);

    // A reveal batch must not trigger a counter watch.
    assert!(e.handle_batch(WatchKind::Reveal, &[hit("years")]).is_empty());

    let effects = e.handle_batch(WatchKind::Counter, &[hit("years")]);
    assert_eq!(
        effects,
        vec![RevealEffect::StartCounter {
            element: "years",
            target: 25,
        }]
    );
    assert!(e.handle_batch(WatchKind::Counter, &[hit("years")]).is_empty());
}

#[test]
fn same_element_can_reveal_and_count_independently() {
    let mut e = engine();
    e.watch_reveal("stat", AnimateMode::None, 0);
    e.watch_counter("stat", 40);

    assert_eq!(e.handle_batch(WatchKind::Reveal, &[hit("stat")]).len(), 1);
    assert_eq!(
        e.state_of(&"stat", WatchKind::Counter),
        Some(WatchState::Pending)
    );
    assert_eq!(e.handle_batch(WatchKind::Counter, &[hit("stat")]).len(), 1);
}

#[test]
fn duplicate_registration_is_ignored() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 0);
    e.watch_reveal("card", AnimateMode::Stagger, 80);

    assert_eq!(e.source().observed.len(), 1);
    assert_eq!(e.handle_batch(WatchKind::Reveal, &[hit("card")]).len(), 1);
}

#[test]
fn discarded_watch_is_ignored_and_discard_is_idempotent() {
    let mut e = engine();
    e.watch_reveal("gone", AnimateMode::None, 0);
    e.discard(&"gone");
    e.discard(&"gone");

    assert_eq!(e.source().unobserved, vec![("gone", WatchKind::Reveal)]);
    assert!(e.handle_batch(WatchKind::Reveal, &[hit("gone")]).is_empty());
    assert_eq!(e.state_of(&"gone", WatchKind::Reveal), Some(WatchState::Discarded));
    assert!(!e.is_revealed(&"gone"));
}

#[test]
fn discard_after_trigger_keeps_revealed() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 0);
    e.handle_batch(WatchKind::Reveal, &[hit("card")]);
    e.discard(&"card");

    assert!(e.is_revealed(&"card"));
    assert_eq!(e.source().unobserved.len(), 1);
}

#[test]
fn settled_watches_leave_the_pending_set() {
    let mut e = engine();
    e.watch_reveal("a", AnimateMode::None, 0);
    e.watch_reveal("b", AnimateMode::None, 0);
    e.watch_counter("c", 9);
    assert_eq!(e.pending_count(), 3);

    e.handle_batch(WatchKind::Reveal, &[hit("a")]);
    e.discard(&"c");
    assert_eq!(e.pending_count(), 1);
    assert_eq!(e.state_of(&"a", WatchKind::Reveal), Some(WatchState::Triggered));
    assert_eq!(e.state_of(&"b", WatchKind::Reveal), Some(WatchState::Pending));
    assert_eq!(e.state_of(&"c", WatchKind::Counter), Some(WatchState::Discarded));

    // A settled element cannot be re-registered into the pending set.
    e.watch_reveal("a", AnimateMode::None, 0);
    assert_eq!(e.pending_count(), 1);
    assert_eq!(e.source().observed.len(), 3);
}

#[test]
fn unknown_entries_are_ignored() {
    let mut e = engine();
    e.watch_reveal("card", AnimateMode::None, 0);
    e.discard(&"never-watched");

    assert!(e
        .handle_batch(WatchKind::Reveal, &[hit("stranger")])
        .is_empty());
    assert_eq!(e.pending_count(), 1);
}

#[test]
fn batch_is_processed_in_delivery_order() {
    let mut e = engine();
    e.watch_reveal("a", AnimateMode::None, 0);
    e.watch_reveal("b", AnimateMode::None, 80);

    let effects = e.handle_batch(WatchKind::Reveal, &[hit("b"), miss("a"), hit("a")]);
    let order: Vec<&str> = effects
        .iter()
        .map(|fx| match fx {
            RevealEffect::AddVisible { element, .. } => *element,
            RevealEffect::StartCounter { element, .. } => *element,
        })
        .collect();
    assert_eq!(order, vec!["b", "a"]);
    assert_eq!(
        e.source().unobserved,
        vec![("b", WatchKind::Reveal), ("a", WatchKind::Reveal)]
    );
}

#[test]
fn group_delay_cycles_every_six_items() {
    assert_eq!(reveal_delay_ms(0, true, None), 0);
    assert_eq!(reveal_delay_ms(5, true, None), 400);
    assert_eq!(reveal_delay_ms(6, true, None), 0);
    assert_eq!(reveal_delay_ms(7, true, None), 80);
    // The cascade overrides whatever the markup declared.
    assert_eq!(reveal_delay_ms(7, true, Some(500)), 80);
}

#[test]
fn ungrouped_delay_uses_declared_or_zero() {
    assert_eq!(reveal_delay_ms(7, false, None), 0);
    assert_eq!(reveal_delay_ms(3, false, Some(200)), 200);
}

#[test]
fn stagger_delays_start_at_zero() {
    assert_eq!(stagger_delays(3).collect::<Vec<_>>(), vec![0, 120, 240]);
    assert_eq!(stagger_delays(0).count(), 0);
}

#[test]
fn attribute_parsing() {
    assert_eq!(AnimateMode::from_attr(Some("stagger")), AnimateMode::Stagger);
    // Matched exactly, like the markup's `data-animate="stagger"`.
    assert_eq!(AnimateMode::from_attr(Some(" stagger ")), AnimateMode::None);
    assert_eq!(AnimateMode::from_attr(Some("Stagger")), AnimateMode::None);
    assert_eq!(AnimateMode::from_attr(Some("")), AnimateMode::None);
    assert_eq!(AnimateMode::from_attr(Some("fade")), AnimateMode::None);
    assert_eq!(AnimateMode::from_attr(None), AnimateMode::None);

    assert_eq!(parse_delay_ms(Some("240")), Some(240));
    assert_eq!(parse_delay_ms(Some(" 80 ")), Some(80));
    assert_eq!(parse_delay_ms(Some("soon")), None);
    assert_eq!(parse_delay_ms(Some("-10")), None);
    assert_eq!(parse_delay_ms(None), None);
}
