use crate::constants::{
    GALLERY_CARD_SELECTOR, GALLERY_DOT_ACTIVE_CLASS, GALLERY_DOT_SELECTOR, GALLERY_INDEX_ATTR,
    GALLERY_TRACK_ID,
};
use crate::core::{GalleryMetrics, GalleryScrollSync};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct GalleryWiring {
    pub track: web::HtmlElement,
    pub dots: Rc<Vec<web::Element>>,
    pub sync: Rc<RefCell<GalleryScrollSync>>,
}

impl GalleryWiring {
    /// Rendered width of the first card; 0 when the track has none.
    fn card_width(&self) -> f64 {
        self.track
            .query_selector(GALLERY_CARD_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| f64::from(el.offset_width()))
            .unwrap_or(0.0)
    }

    fn pointer_x(&self, ev: &web::PointerEvent) -> f64 {
        f64::from(ev.page_x() - self.track.offset_left())
    }

    /// Re-derive the active card from the current scroll and repaint dots.
    fn refresh(&self) {
        let card_width = self.card_width();
        let scroll = f64::from(self.track.scroll_left());
        let (active, changed) = self.sync.borrow_mut().sync_scroll(scroll, card_width);
        if changed {
            log::debug!("[gallery] active card {}", active);
        }
        self.paint_dots();
    }

    fn paint_dots(&self) {
        let sync = self.sync.borrow();
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot
                .class_list()
                .toggle_with_force(GALLERY_DOT_ACTIVE_CLASS, sync.indicators().is_active(i));
        }
    }
}

pub fn wire_gallery(document: &web::Document) -> anyhow::Result<()> {
    let Some(track) = dom::html_element_by_id(document, GALLERY_TRACK_ID) else {
        log::debug!("[gallery] no #{}; skipping", GALLERY_TRACK_ID);
        return Ok(());
    };
    let dots = dom::query_all(document, GALLERY_DOT_SELECTOR);
    if dots.is_empty() {
        log::debug!("[gallery] no indicator dots; skipping");
        return Ok(());
    }

    let w = GalleryWiring {
        track,
        sync: Rc::new(RefCell::new(GalleryScrollSync::new(
            dots.len(),
            GalleryMetrics::default(),
        ))),
        dots: Rc::new(dots),
    };
    wire_pointerdown(&w);
    wire_pointer_end(&w, "pointerup");
    wire_pointer_end(&w, "pointerleave");
    wire_pointermove(&w);
    wire_scroll(&w)?;
    wire_dot_clicks(&w);
    w.refresh();
    log::info!("[gallery] wired {} dots", w.dots.len());
    Ok(())
}

fn wire_pointerdown(w: &GalleryWiring) {
    let w = w.clone();
    let track = w.track.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = w.pointer_x(&ev);
        let scroll = f64::from(w.track.scroll_left());
        w.sync.borrow_mut().press(x, scroll);
        dom::set_style(&w.track, "cursor", "grabbing");
        log::debug!("[gallery] drag start x={:.0} scroll={:.0}", x, scroll);
    }) as Box<dyn FnMut(_)>);
    _ = track.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer_end(w: &GalleryWiring, event: &str) {
    let w = w.clone();
    let track = w.track.clone();

    let closure = Closure::wrap(Box::new(move || {
        if w.sync.borrow().is_dragging() {
            w.sync.borrow_mut().release();
        }
        dom::set_style(&w.track, "cursor", "grab");
    }) as Box<dyn FnMut()>);
    _ = track.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &GalleryWiring) {
    let w = w.clone();
    let track = w.track.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = w.pointer_x(&ev);
        let Some(offset) = w.sync.borrow().drag_to(x) else {
            return;
        };
        ev.prevent_default();
        w.track.set_scroll_left(offset.round() as i32);
    }) as Box<dyn FnMut(_)>);
    _ = track.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_scroll(w: &GalleryWiring) -> anyhow::Result<()> {
    let w = w.clone();
    let track = w.track.clone();
    dom::add_passive_listener(&track, "scroll", move || w.refresh())
}

fn wire_dot_clicks(w: &GalleryWiring) {
    for (pos, dot) in w.dots.iter().enumerate() {
        let index = dot
            .get_attribute(GALLERY_INDEX_ATTR)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(pos);
        let w = w.clone();
        dom::add_click_listener(dot, move || {
            let left = w.sync.borrow().indicator_target(index, w.card_width());
            let opts = web::ScrollToOptions::new();
            opts.set_left(left);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.track.scroll_to_with_scroll_to_options(&opts);
        });
    }
}
