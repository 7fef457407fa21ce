use crate::constants::{
    ANIMATE_ATTR, ANIMATE_SELECTOR, CASCADE_GROUP_SELECTORS, COUNT_ATTR, COUNT_SELECTOR,
    DELAY_ATTR, EMBLEM_SELECTOR, VISIBLE_CLASS,
};
use crate::core::constants::EMBLEM_REVEAL_DELAY_MS;
use crate::core::reveal::{parse_delay_ms, reveal_delay_ms};
use crate::core::{
    parse_count_target, AnimateMode, CounterTween, IntersectionEntry, ObservationSource,
    ObserverOptions, RevealEffect, RevealEngine, RevealTarget, WatchKind,
};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// One `IntersectionObserver` per watch kind.
pub struct DomObservationSource {
    reveal: web::IntersectionObserver,
    counter: web::IntersectionObserver,
}

impl DomObservationSource {
    fn observer(&self, kind: WatchKind) -> &web::IntersectionObserver {
        match kind {
            WatchKind::Reveal => &self.reveal,
            WatchKind::Counter => &self.counter,
        }
    }
}

impl ObservationSource<web::Element> for DomObservationSource {
    fn observe(&mut self, element: &web::Element, options: &ObserverOptions) {
        self.observer(options.kind).observe(element);
    }

    fn unobserve(&mut self, element: &web::Element, kind: WatchKind) {
        self.observer(kind).unobserve(element);
    }
}

type Engine = RevealEngine<web::Element, DomObservationSource>;
type EngineSlot = Rc<RefCell<Option<Engine>>>;

fn batch_handler(slot: EngineSlot, kind: WatchKind) -> Closure<dyn FnMut(js_sys::Array)> {
    Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let effects = {
            let mut guard = slot.borrow_mut();
            let Some(engine) = guard.as_mut() else {
                return;
            };
            let mut batch = Vec::new();
            for entry in dom::observer_entries(&entries) {
                let target = entry.target();
                if !target.is_connected() {
                    engine.discard(&target);
                    continue;
                }
                // Live count; section lines are prepended after wiring.
                let child_count = target.child_element_count() as usize;
                batch.push(IntersectionEntry::new(
                    target,
                    entry.is_intersecting(),
                    child_count,
                ));
            }
            engine.handle_batch(kind, &batch)
        };
        for effect in effects {
            if let Err(e) = apply(effect) {
                log::warn!("[reveal] effect failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>)
}

fn apply(effect: RevealEffect<web::Element>) -> anyhow::Result<()> {
    match effect {
        RevealEffect::AddVisible {
            element,
            target,
            delay_ms,
        } => {
            let el = match target {
                RevealTarget::Element => Some(element),
                RevealTarget::Child(i) => element.children().item(i as u32),
            };
            if let Some(el) = el {
                dom::set_timeout(delay_ms, move || {
                    _ = el.class_list().add_1(VISIBLE_CLASS);
                })?;
            }
        }
        RevealEffect::StartCounter { element, target } => start_counter(element, target),
    }
    Ok(())
}

fn start_counter(element: web::Element, target: u32) {
    let tween = CounterTween::new(target);
    let started = Instant::now();
    log::debug!("[counter] tween to {}", target);
    dom::animate_while(move || {
        let frame = tween.sample(started.elapsed().as_secs_f64() * 1000.0);
        element.set_text_content(Some(&frame.value.to_string()));
        !frame.done
    });
}

fn schedule_emblem(document: &web::Document) -> anyhow::Result<()> {
    if let Some(emblem) = dom::query(document, EMBLEM_SELECTOR) {
        dom::set_timeout(EMBLEM_REVEAL_DELAY_MS, move || {
            _ = emblem.class_list().add_1(VISIBLE_CLASS);
        })?;
    }
    Ok(())
}

fn in_cascade_group(el: &web::Element) -> bool {
    CASCADE_GROUP_SELECTORS
        .iter()
        .any(|sel| el.closest(sel).ok().flatten().is_some())
}

pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    schedule_emblem(document)?;

    let animated = dom::query_all(document, ANIMATE_SELECTOR);
    let counters = dom::query_all(document, COUNT_SELECTOR);
    if animated.is_empty() && counters.is_empty() {
        log::debug!("[reveal] nothing to observe");
        return Ok(());
    }

    let slot: EngineSlot = Rc::new(RefCell::new(None));
    let on_reveal = batch_handler(slot.clone(), WatchKind::Reveal);
    let on_counter = batch_handler(slot.clone(), WatchKind::Counter);
    let reveal_opts = ObserverOptions::reveal();
    let counter_opts = ObserverOptions::counter();
    let source = DomObservationSource {
        reveal: dom::intersection_observer(
            reveal_opts.threshold,
            reveal_opts.root_margin,
            &on_reveal,
        )?,
        counter: dom::intersection_observer(
            counter_opts.threshold,
            counter_opts.root_margin,
            &on_counter,
        )?,
    };
    on_reveal.forget();
    on_counter.forget();

    let mut engine = RevealEngine::new(source);
    for (i, el) in animated.into_iter().enumerate() {
        let grouped = in_cascade_group(&el);
        let declared = parse_delay_ms(el.get_attribute(DELAY_ATTR).as_deref());
        let delay_ms = reveal_delay_ms(i, grouped, declared);
        if grouped {
            _ = el.set_attribute(DELAY_ATTR, &delay_ms.to_string());
        }
        let mode = AnimateMode::from_attr(el.get_attribute(ANIMATE_ATTR).as_deref());
        engine.watch_reveal(el, mode, delay_ms);
    }

    let mut counted = 0usize;
    for el in counters {
        match el.get_attribute(COUNT_ATTR).as_deref().and_then(parse_count_target) {
            Some(target) => {
                engine.watch_counter(el, target);
                counted += 1;
            }
            None => log::debug!("[counter] non-numeric {}; reveal only", COUNT_ATTR),
        }
    }

    log::info!(
        "[reveal] {} watches pending ({} counters)",
        engine.pending_count(),
        counted
    );
    *slot.borrow_mut() = Some(engine);
    Ok(())
}
